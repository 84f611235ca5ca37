//! Namespace Node
//!
//! A single file or directory entry. Nodes live in the tree's arena and
//! refer to each other through `NodeId` handles, so the parent link never
//! owns anything.

use std::collections::BTreeMap;

use super::types::{FsError, NodeId, NodeKind};

/// File or directory entry.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    name: String,
    content: String,
    children: BTreeMap<String, NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    /// Fresh node with no parent, no children and empty content.
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            content: String::new(),
            children: BTreeMap::new(),
            parent: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Handle of the owning directory. The handle may be stale; the tree
    /// treats a stale parent as no parent.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Child names in key order.
    pub fn child_names(&self) -> Vec<String> {
        self.children.keys().cloned().collect()
    }

    pub(crate) fn child_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    /// Replace the file content. Directories carry no content.
    pub fn set_content(&mut self, text: impl Into<String>) -> Result<(), FsError> {
        if self.is_directory() {
            return Err(FsError::WrongNodeKind {
                path: self.name.clone(),
                operation: "write".to_string(),
            });
        }
        self.content = text.into();
        Ok(())
    }

    /// Record `child` under `name`. The back-reference on the child is set
    /// by `RamFs::adopt`, which is the only caller.
    pub(crate) fn attach_child(&mut self, name: &str, child: NodeId) -> Result<(), FsError> {
        if self.children.contains_key(name) {
            return Err(FsError::NodeExists { name: name.to_string() });
        }
        self.children.insert(name.to_string(), child);
        Ok(())
    }

    /// Remove the named child, returning its handle. Absent names are not
    /// an error.
    pub(crate) fn detach_child(&mut self, name: &str) -> Option<NodeId> {
        self.children.remove(name)
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }
}
