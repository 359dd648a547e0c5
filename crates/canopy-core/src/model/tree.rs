use serde::{Deserialize, Serialize};

use crate::events::ToggleClick;

use super::node::{NodeId, TreeNode};

/// Root container for a forest of tree nodes.
///
/// Every mutating operation re-runs the propagation pass, so the
/// parent-to-child `depth`/`disabled` invariant self-heals after any
/// structural or state change, including nodes added or removed through
/// direct field access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub roots: Vec<TreeNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roots(roots: Vec<TreeNode>) -> Self {
        let mut tree = Self { roots };
        tree.propagate();
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn push_root(&mut self, node: TreeNode) {
        self.roots.push(node);
        self.propagate();
    }

    /// The push-down constraint: every child gets `depth = parent.depth + 1`
    /// and the parent's `disabled` flag, overwriting prior values. Root
    /// nodes keep their own settings.
    pub fn propagate(&mut self) {
        for root in &mut self.roots {
            root.propagate_children();
        }
    }

    /// Toggle the node with the given id.
    ///
    /// Returns `None` without touching any state when the target is a
    /// leaf, disabled, or unknown.
    pub fn toggle(&mut self, id: NodeId) -> Option<ToggleClick> {
        let event = self.find_mut(id).and_then(TreeNode::toggle);
        match &event {
            Some(event) => {
                log::debug!("toggled {:?} -> expanded={}", event.value, event.expanded);
                self.propagate();
            }
            None => log::debug!("toggle absorbed for {id}"),
        }
        event
    }

    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.roots.iter_mut().find_map(|root| root.find_mut(id))
    }

    /// First node with the given display value, in document order.
    pub fn find_by_value(&self, value: &str) -> Option<&TreeNode> {
        Self::find_by_value_in(&self.roots, value)
    }

    fn find_by_value_in<'a>(nodes: &'a [TreeNode], value: &str) -> Option<&'a TreeNode> {
        for node in nodes {
            if node.value == value {
                return Some(node);
            }
            if let Some(found) = Self::find_by_value_in(&node.children, value) {
                return Some(found);
            }
        }
        None
    }

    /// Expand every parent node in the tree.
    pub fn expand_all(&mut self) {
        for root in &mut self.roots {
            root.set_expanded_deep(true);
        }
        self.propagate();
    }

    /// Collapse every parent node in the tree.
    pub fn collapse_all(&mut self) {
        for root in &mut self.roots {
            root.set_expanded_deep(false);
        }
        self.propagate();
    }

    /// Flattened visible rows in document order; collapsed subtrees do
    /// not contribute.
    pub fn items(&self) -> Vec<TreeItem> {
        let mut out = Vec::new();
        for root in &self.roots {
            root.collect_items(&mut out);
        }
        out
    }
}

/// Lightweight snapshot of one visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub id: NodeId,
    pub value: String,
    pub depth: u16,
    pub expanded: bool,
    pub disabled: bool,
    pub has_children: bool,
}

impl TreeItem {
    pub fn from_node(node: &TreeNode) -> Self {
        Self {
            id: node.id(),
            value: node.value.clone(),
            depth: node.depth,
            expanded: node.expanded,
            disabled: node.disabled,
            has_children: node.has_children(),
        }
    }
}
