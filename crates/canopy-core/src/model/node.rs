use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::ToggleClick;

use super::tree::TreeItem;

/// Stable identity of a node, used as the render key and the address
/// for tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry in the tree, possibly containing further nodes.
///
/// A node owns its direct children. `depth` and `disabled` are pushed
/// down by [`super::tree::Tree::propagate`] and overwrite whatever the
/// children carried before, so only root values of those two fields are
/// authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    id: NodeId,
    pub value: String,
    pub depth: u16,
    pub expanded: bool,
    pub disabled: bool,
    pub active: bool,
    pub selected: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            value: value.into(),
            depth: 0,
            expanded: false,
            disabled: false,
            active: false,
            selected: false,
            children: Vec::new(),
        }
    }

    pub fn with_children(value: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            children,
            ..Self::new(value)
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Flip the expand/collapse state machine.
    ///
    /// Only a non-disabled node with at least one child can toggle; a
    /// toggle on a leaf or disabled node is silently absorbed. Returns
    /// the committed notification payload.
    pub fn toggle(&mut self) -> Option<ToggleClick> {
        if self.is_leaf() || self.disabled {
            return None;
        }
        self.expanded = !self.expanded;
        Some(ToggleClick {
            node: self.id,
            value: self.value.clone(),
            expanded: self.expanded,
        })
    }

    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Push `depth` and `disabled` into the subtree rooted here.
    pub(crate) fn propagate_children(&mut self) {
        let next_depth = self.depth.saturating_add(1);
        for child in &mut self.children {
            child.depth = next_depth;
            child.disabled = self.disabled;
            child.propagate_children();
        }
    }

    pub(crate) fn collect_items(&self, out: &mut Vec<TreeItem>) {
        out.push(TreeItem::from_node(self));
        if self.expanded && self.has_children() {
            for child in &self.children {
                child.collect_items(out);
            }
        }
    }

    pub(crate) fn set_expanded_deep(&mut self, expanded: bool) {
        if self.has_children() {
            self.expanded = expanded;
            for child in &mut self.children {
                child.set_expanded_deep(expanded);
            }
        }
    }
}
