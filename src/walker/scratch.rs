//! Per-run traversal scratch state.

use rustc_hash::FxHashMap;

use crate::base::NodeId;

/// Side table holding the walker's per-node scratch state, keyed by node
/// identity.
///
/// Qualified names and visit marks are traversal state, not model state:
/// keeping them out of the declaration nodes leaves the model untouched by
/// a walk and reusable across runs. The table is dropped with its walker.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    states: FxHashMap<NodeId, NodeState>,
}

#[derive(Debug, Default)]
struct NodeState {
    qualified: String,
    visited: bool,
}

impl Scratch {
    /// Assign the node's qualified name for the discovery edge that just
    /// reached it. A shared node is reassigned once per edge.
    pub fn set_qualified(&mut self, node: NodeId, qualified: String) {
        self.states.entry(node).or_default().qualified = qualified;
    }

    /// The most recently assigned qualified name for the node.
    pub fn qualified(&self, node: NodeId) -> &str {
        self.states
            .get(&node)
            .map(|state| state.qualified.as_str())
            .unwrap_or("")
    }

    pub fn mark_visited(&mut self, node: NodeId) {
        self.states.entry(node).or_default().visited = true;
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.states
            .get(&node)
            .is_some_and(|state| state.visited)
    }
}
