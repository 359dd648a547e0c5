pub mod node;
pub mod tree;

pub use node::{NodeId, TreeNode};
pub use tree::{Tree, TreeItem};
