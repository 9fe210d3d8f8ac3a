//! Declaration graph walker: traversal, qualified-name synthesis, and
//! emission decisions.
//!
//! # Module structure
//!
//! - [`walk`] - The iterative explicit-stack walk
//! - [`scratch`] - Per-run side table (qualified names, visit marks)

mod scratch;
mod walk;

pub use walk::Walker;
