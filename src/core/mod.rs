pub mod render;
pub mod walk;

pub use render::{write_node, write_tree};
pub use walk::build_tree;
