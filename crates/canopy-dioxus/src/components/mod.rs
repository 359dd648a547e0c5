pub mod icons;
pub mod tree_view;
pub mod tree_view_node;

pub use icons::CaretDownIcon;
pub use tree_view::TreeView;
pub use tree_view_node::TreeViewNode;
