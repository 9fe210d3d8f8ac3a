//! # externgen
//!
//! Extracts, from a typed declaration surface, the complete set of
//! fully-qualified identifier paths a minifier or binding generator must
//! never rename or strip.
//!
//! The core is an iterative, explicit-stack walk over a forest of root
//! declarations: every reachable declaration gets a dotted qualified name,
//! shared and cyclic references are tolerated without re-expanding any
//! subtree, and each distinct address of a declaration is emitted as one
//! line of the extern artifact.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! cli      → command surface (paths, run pipeline)
//!   ↓
//! walker   → iterative graph walk, qualified-name synthesis
//!   ↓
//! emit     → name sink, extern artifact buffering
//!   ↓
//! model    → declaration nodes, adapter contract, surface loader
//!   ↓
//! base     → primitives (NodeId, DeclKind, Accessibility)
//! ```

/// Foundation types: NodeId, DeclKind, Accessibility
pub mod base;

/// Command surface: argument handling, output path derivation, run pipeline
pub mod cli;

/// Name sink and extern artifact buffering
pub mod emit;

/// Error types
pub mod error;

/// Semantic model: declaration nodes, adapter contract, surface loading
pub mod model;

/// Declaration graph walker
pub mod walker;

// Re-export commonly needed items
pub use base::{Accessibility, DeclKind, NodeId};
pub use emit::{ExternWriter, NameSink};
pub use error::{ExternError, ExternResult};
pub use model::{DeclGraph, Declaration, SemanticModel, TypeRef};
pub use walker::Walker;
