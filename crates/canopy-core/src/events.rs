use crate::model::NodeId;

/// Payload of the toggle notification.
///
/// Emitted when a toggle interaction lands on a parent node, before any
/// state changes. `expanded` carries the value the node will have once
/// the toggle is committed with [`crate::Tree::toggle`]; an application
/// that never commits has canceled the toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleClick {
    pub node: NodeId,
    pub value: String,
    pub expanded: bool,
}

/// Payload of the selection notification (label activation, or Enter on
/// the focused node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSelect {
    pub node: NodeId,
    pub value: String,
}
