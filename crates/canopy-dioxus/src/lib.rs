pub mod components;

// Re-export key types for easier usage
pub use components::{CaretDownIcon, TreeView, TreeViewNode};

/// Stylesheet for the default element prefix; inject it the usual way:
/// `style { {canopy_dioxus::TREE_CSS} }`.
pub const TREE_CSS: &str = include_str!("../assets/tree.css");
