//! Semantic model: declaration nodes, type references, the adapter contract
//! the walker consumes, and the surface loader.
//!
//! # Module structure
//!
//! - [`decl`] - Declaration nodes and type references
//! - [`adapter`] - The [`SemanticModel`] query contract
//! - [`graph`] - [`DeclGraph`], the arena-backed in-memory model
//! - [`load`] - JSON declaration-surface loading

mod adapter;
mod decl;
mod graph;
pub mod load;

pub use adapter::SemanticModel;
pub use decl::{Declaration, TypeRef};
pub use graph::DeclGraph;

#[cfg(test)]
mod tests;
