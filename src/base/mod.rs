//! Foundation types for the externgen crate.
//!
//! This module provides the primitives used throughout the crate:
//! - [`NodeId`] - Arena identifier for declaration nodes
//! - [`DeclKind`] - Kinds of declared entities
//! - [`Accessibility`] - Member access levels
//!
//! This module has NO dependencies on other externgen modules.

/// Unique identifier for a declaration node in the arena.
/// Uses u32 for compact storage (supports ~4 billion nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind of a declared entity in a typed declaration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Module,
    Variable,
    Function,
    Class,
    Interface,
    Property,
    Method,
}

impl DeclKind {
    /// Returns true for value declarations (variables and properties),
    /// the kinds whose declared type contributes type-property children.
    pub fn is_value(self) -> bool {
        matches!(self, DeclKind::Variable | DeclKind::Property)
    }
}

/// Access level of a member declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accessibility {
    #[default]
    Public,
    Private,
    Protected,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        matches!(self, Accessibility::Public)
    }
}
