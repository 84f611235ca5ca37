//! File System Types
//!
//! Core types shared by the node arena, the path resolver and the tree.

use thiserror::Error;

/// Path separator understood by the resolver.
pub const SEPARATOR: char = '/';

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("node already exists: '{name}'")]
    NodeExists { name: String },

    #[error("path component not found: '{segment}' (after '{consumed}')")]
    PathNotFound { segment: String, consumed: String },

    #[error("not a directory: '{path}'")]
    NotADirectory { path: String },

    #[error("wrong node kind, cannot {operation} '{path}'")]
    WrongNodeKind { path: String, operation: String },

    #[error("empty input, {operation}")]
    EmptyInput { operation: String },

    #[error("invalid name: '{name}'")]
    InvalidName { name: String },
}

/// Variant discriminator of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn is_directory(self) -> bool {
        matches!(self, NodeKind::Directory)
    }
}

/// Non-owning handle to a node stored in the tree's arena.
///
/// The generation makes a handle to a released node stale: looking it up
/// after its subtree was removed yields nothing, even when the slot has
/// since been reused by a newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FsError::PathNotFound {
            segment: "b".to_string(),
            consumed: "/a".to_string(),
        };
        assert_eq!(err.to_string(), "path component not found: 'b' (after '/a')");

        let err = FsError::NodeExists { name: "x".to_string() };
        assert_eq!(err.to_string(), "node already exists: 'x'");

        let err = FsError::WrongNodeKind {
            path: "/docs".to_string(),
            operation: "write".to_string(),
        };
        assert_eq!(err.to_string(), "wrong node kind, cannot write '/docs'");
    }

    #[test]
    fn test_node_kind() {
        assert!(NodeKind::Directory.is_directory());
        assert!(!NodeKind::File.is_directory());
    }
}
