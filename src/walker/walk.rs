//! Iterative depth-first walk over the declaration graph.

use indexmap::IndexSet;
use tracing::trace;

use crate::base::NodeId;
use crate::emit::NameSink;
use crate::model::SemanticModel;

use super::scratch::Scratch;

/// Explicit-stack walker that discovers every reachable declaration,
/// synthesizes dotted qualified names, and emits one name per reachable
/// address of every non-synthetic declaration.
///
/// The stack is explicit (not call recursion) so arbitrarily deep or
/// cyclic surfaces cannot overflow. Children of a node are enumerated at
/// most once; a node reached again through a later edge is emitted under
/// the new path without re-expanding its subtree.
pub struct Walker<'a, M: SemanticModel> {
    model: &'a M,
    scratch: Scratch,
    stack: Vec<NodeId>,
}

impl<'a, M: SemanticModel> Walker<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self {
            model,
            scratch: Scratch::default(),
            stack: Vec::new(),
        }
    }

    /// Walk the graph from `roots`, recording one qualified name per
    /// reachable declaration address into `sink`.
    ///
    /// Emission order equals pop order: depth-first, with sibling order
    /// reversed relative to discovery because of LIFO semantics. Golden
    /// outputs depend on this order.
    pub fn run(mut self, roots: &[NodeId], sink: &mut dyn NameSink) {
        for &root in roots {
            self.scratch
                .set_qualified(root, self.model.own_name(root).to_string());
            self.stack.push(root);
        }

        while let Some(node) = self.stack.pop() {
            // A node sits on the stack twice when two parents reference it
            // before its first pop. The second pop is a re-entry: record
            // the address, keep the subtree collapsed.
            if self.scratch.is_visited(node) {
                self.emit(node, sink);
                continue;
            }

            let children = self.discover_children(node);
            if children.is_empty() {
                self.emit(node, sink);
            } else {
                for child in children {
                    let qualified = format!(
                        "{}.{}",
                        self.scratch.qualified(node),
                        self.model.own_name(child)
                    );
                    self.scratch.set_qualified(child, qualified);
                    if self.scratch.is_visited(child) {
                        // Re-entry: the child is part of this parent too,
                        // e.g. an interface that types an exported variable
                        // and is also exported itself. Every address must
                        // survive minification, so emit under the new path.
                        self.emit(child, sink);
                    } else {
                        self.stack.push(child);
                    }
                }
            }
            self.scratch.mark_visited(node);
        }
    }

    /// Union of the three discovery channels, in channel order: exports,
    /// structural members, then public properties of the declared
    /// structured type (value declarations only).
    fn discover_children(&self, node: NodeId) -> IndexSet<NodeId> {
        let mut children: IndexSet<NodeId> = IndexSet::new();
        children.extend(self.model.exports_of(node).iter().copied());
        children.extend(self.model.members_of(node).iter().copied());

        if self.model.is_value(node) {
            if let Some(ty) = self.model.declared_type_of(node) {
                if self.model.is_structured(ty) {
                    for property in self.model.public_properties_of(ty) {
                        // Only public properties travel through the type
                        // channel; direct members are never filtered.
                        if self.model.accessibility_of(property).is_public() {
                            children.insert(property);
                        }
                    }
                }
            }
        }

        trace!(
            node = node.index(),
            count = children.len(),
            "discovered children"
        );
        children
    }

    fn emit(&self, node: NodeId, sink: &mut dyn NameSink) {
        if self.model.is_prototype_artifact(node) {
            return;
        }
        trace!(qualified = self.scratch.qualified(node), "emit");
        sink.record(self.scratch.qualified(node));
    }
}
