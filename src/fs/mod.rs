//! File System Module
//!
//! In-memory hierarchical namespace: an arena of nodes, a path resolver,
//! and the tree that ties them together behind a cursor.

pub mod node;
pub mod resolver;
pub mod tree;
pub mod types;

pub use node::Node;
pub use resolver::{resolve, split_path};
pub use tree::RamFs;
pub use types::*;
