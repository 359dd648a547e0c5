pub mod events;
pub mod model;
pub mod render;
pub mod settings;

// Re-export key types for easier usage
pub use events::{NodeSelect, ToggleClick};
pub use model::{NodeId, Tree, TreeItem, TreeNode};
pub use render::{
    AriaState, NodeKind, indent_offset, label_offset_style, node_classes, toggle_classes,
};
pub use settings::{DEFAULT_PREFIX, Settings, SettingsError};
