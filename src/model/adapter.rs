//! Adapter contract between the semantic model and the walker.

use crate::base::{Accessibility, NodeId};

use super::decl::TypeRef;

/// Query surface the walker consumes.
///
/// The walker never mutates the model and performs no parsing, binding, or
/// diagnostics of its own: the model is assumed fully bound before a walk
/// starts, and malformed query results are contract violations rather than
/// recoverable conditions.
pub trait SemanticModel {
    /// The node's own name; for an export-equals alias declaration, the
    /// aliased target's name.
    fn own_name(&self, node: NodeId) -> &str;

    /// Direct exported members of a module/namespace-like node.
    fn exports_of(&self, node: NodeId) -> &[NodeId];

    /// Direct structural members of the node (class/interface body).
    fn members_of(&self, node: NodeId) -> &[NodeId];

    /// Declared or inferred value type, with one level of array-element
    /// unwrapping applied: an array-typed declaration reports its element
    /// type instead of the array type itself.
    fn declared_type_of(&self, node: NodeId) -> Option<&TypeRef>;

    /// Returns true if the type denotes a class or interface.
    fn is_structured(&self, ty: &TypeRef) -> bool;

    /// All properties of a structured type: own members plus members
    /// inherited through its base types, each carrying its accessibility.
    /// Empty for non-structured types.
    fn public_properties_of(&self, ty: &TypeRef) -> Vec<NodeId>;

    fn accessibility_of(&self, node: NodeId) -> Accessibility;

    /// Returns true for value declarations (variables and properties).
    fn is_value(&self, node: NodeId) -> bool;

    /// Returns true for synthetic constructor/prototype-link entries.
    fn is_prototype_artifact(&self, node: NodeId) -> bool;
}
