//! Arena-backed in-memory semantic model.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::{Accessibility, DeclKind, NodeId};

use super::adapter::SemanticModel;
use super::decl::{Declaration, TypeRef};

/// The declaration surface as an object graph.
///
/// All nodes live in a single arena - the single source of truth - and
/// roots are kept in declaration order. The walker only reads the graph;
/// mutation happens during construction (by the surface loader or test
/// fixtures).
#[derive(Debug, Default)]
pub struct DeclGraph {
    arena: Vec<Declaration>,
    roots: Vec<NodeId>,
}

impl DeclGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration to the arena and get its ID.
    pub fn declare(&mut self, kind: DeclKind, name: impl Into<SmolStr>) -> NodeId {
        let id = NodeId::new(self.arena.len());
        self.arena.push(Declaration::new(kind, name));
        id
    }

    /// Get a declaration by its NodeId (O(1) arena lookup).
    pub fn get(&self, id: NodeId) -> &Declaration {
        &self.arena[id.index()]
    }

    fn get_mut(&mut self, id: NodeId) -> &mut Declaration {
        &mut self.arena[id.index()]
    }

    /// Mark a declaration as a traversal root.
    pub fn add_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    /// Traversal roots, in declaration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns the count of declarations in the arena (O(1)).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn add_export(&mut self, parent: NodeId, child: NodeId) {
        self.get_mut(parent).exports.push(child);
    }

    pub fn add_member(&mut self, parent: NodeId, child: NodeId) {
        self.get_mut(parent).members.push(child);
    }

    pub fn add_extends(&mut self, node: NodeId, base: NodeId) {
        self.get_mut(node).extends.push(base);
    }

    pub fn set_declared_type(&mut self, node: NodeId, ty: TypeRef) {
        self.get_mut(node).declared_type = Some(ty);
    }

    pub fn set_alias(&mut self, node: NodeId, target: impl Into<SmolStr>) {
        self.get_mut(node).alias_of = Some(target.into());
    }

    pub fn set_accessibility(&mut self, node: NodeId, accessibility: Accessibility) {
        self.get_mut(node).accessibility = accessibility;
    }

    pub fn mark_prototype(&mut self, node: NodeId) {
        self.get_mut(node).is_prototype = true;
    }
}

impl SemanticModel for DeclGraph {
    fn own_name(&self, node: NodeId) -> &str {
        self.get(node).effective_name()
    }

    fn exports_of(&self, node: NodeId) -> &[NodeId] {
        &self.get(node).exports
    }

    fn members_of(&self, node: NodeId) -> &[NodeId] {
        &self.get(node).members
    }

    fn declared_type_of(&self, node: NodeId) -> Option<&TypeRef> {
        match self.get(node).declared_type.as_ref() {
            // An array-typed declaration reports its element type.
            Some(TypeRef::Array(element)) => Some(element),
            other => other,
        }
    }

    fn is_structured(&self, ty: &TypeRef) -> bool {
        ty.is_structured()
    }

    fn public_properties_of(&self, ty: &TypeRef) -> Vec<NodeId> {
        let TypeRef::Structured(start) = *ty else {
            return Vec::new();
        };

        // Own members first, then inherited members in extends order,
        // without revisiting a base twice (extends cycles must not hang
        // the query).
        let mut properties: IndexSet<NodeId> = IndexSet::new();
        let mut seen: FxHashSet<NodeId> = FxHashSet::default();
        let mut pending = vec![start];
        let mut next = 0;
        while next < pending.len() {
            let decl = pending[next];
            next += 1;
            if !seen.insert(decl) {
                continue;
            }
            properties.extend(self.get(decl).members.iter().copied());
            pending.extend(self.get(decl).extends.iter().copied());
        }
        properties.into_iter().collect()
    }

    fn accessibility_of(&self, node: NodeId) -> Accessibility {
        self.get(node).accessibility
    }

    fn is_value(&self, node: NodeId) -> bool {
        self.get(node).kind.is_value()
    }

    fn is_prototype_artifact(&self, node: NodeId) -> bool {
        self.get(node).is_prototype
    }
}
