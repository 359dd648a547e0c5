//! Render derivation: pure functions from node state to presentation
//! metadata (classification, indentation offsets, ARIA state, class
//! strings). The components consume these verbatim, so everything the
//! markup contract promises is testable here without a DOM.

use crate::model::TreeNode;
use crate::settings::Settings;

/// Rendering classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Parent,
}

impl NodeKind {
    pub fn of(node: &TreeNode) -> Self {
        if node.has_children() {
            NodeKind::Parent
        } else {
            NodeKind::Leaf
        }
    }
}

/// Horizontal label offset in rem units.
///
/// A parent label reserves `depth + 1`; a leaf label reserves
/// `depth + 2.5` so its text lines up with sibling parent labels that
/// carry a toggle glyph. Both formulas are exact, not approximations.
pub fn indent_offset(depth: u16, kind: NodeKind) -> f32 {
    match kind {
        NodeKind::Parent => f32::from(depth) + 1.0,
        NodeKind::Leaf => f32::from(depth) + 2.5,
    }
}

/// Inline style for the label row: negative margin paired with equal
/// padding, keeping row backgrounds full-width while the text indents.
pub fn label_offset_style(offset: f32) -> String {
    format!("margin-left: -{offset}rem; padding-left: {offset}rem;")
}

/// Tri-state ARIA attribute values for one node.
///
/// `None` means the attribute must be entirely absent from the markup;
/// absence is semantically different from `"false"` for assistive
/// technology (a leaf is "not expandable", not "collapsed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AriaState {
    /// Present only for parent nodes, mirroring `expanded`.
    pub expanded: Option<bool>,
    /// Present only for enabled nodes, mirroring `selected`; a disabled
    /// node cannot be selected.
    pub selected: Option<bool>,
    /// `Some(true)` when the node is active, otherwise absent.
    pub current: Option<bool>,
    /// `Some(true)` when the node is disabled, otherwise absent.
    pub disabled: Option<bool>,
}

impl AriaState {
    pub fn of(node: &TreeNode) -> Self {
        Self {
            expanded: node.has_children().then_some(node.expanded),
            selected: (!node.disabled).then_some(node.selected),
            current: node.active.then_some(true),
            disabled: node.disabled.then_some(true),
        }
    }
}

/// Class string for the `treeitem` element.
pub fn node_classes(settings: &Settings, node: &TreeNode) -> String {
    let mut classes = vec![settings.class("tree-node")];
    if node.active {
        classes.push(settings.class("tree-node--active"));
    }
    if node.disabled {
        classes.push(settings.class("tree-node--disabled"));
    }
    if node.selected {
        classes.push(settings.class("tree-node--selected"));
    }
    classes.push(match NodeKind::of(node) {
        NodeKind::Leaf => settings.class("tree-leaf-node"),
        NodeKind::Parent => settings.class("tree-parent-node"),
    });
    classes.join(" ")
}

/// Class string for the toggle glyph; the `--expanded` modifier is the
/// CSS hook that rotates the caret.
pub fn toggle_classes(settings: &Settings, expanded: bool) -> String {
    let base = settings.class("tree-parent-node__toggle-icon");
    if expanded {
        format!(
            "{base} {}",
            settings.class("tree-parent-node__toggle-icon--expanded")
        )
    } else {
        base
    }
}
