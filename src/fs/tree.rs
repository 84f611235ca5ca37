//! In-Memory Namespace Tree
//!
//! Owns every node in an arena, tracks the session cursor, and exposes the
//! structural operations used by the command layer. Operations are total:
//! they return `FsError` instead of panicking and a failed call leaves the
//! tree untouched.

use super::node::Node;
use super::resolver;
use super::types::{FsError, NodeId, NodeKind, SEPARATOR};

/// Name given to the root directory. It never appears in rendered paths.
const ROOT_NAME: &str = "root";

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// In-memory hierarchical namespace.
#[derive(Debug, Clone)]
pub struct RamFs {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    cursor: NodeId,
    cursor_path: String,
}

impl RamFs {
    /// Create a namespace holding only the root directory.
    pub fn new() -> Self {
        let root = NodeId { index: 0, generation: 0 };
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(Node::new(NodeKind::Directory, ROOT_NAME)),
            }],
            free: Vec::new(),
            root,
            cursor: root,
            cursor_path: SEPARATOR.to_string(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The current working directory.
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Absolute path of the cursor, as cached by the last navigation.
    pub fn current_path(&self) -> &str {
        &self.cursor_path
    }

    /// Look up a live node. Stale handles yield `None`.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Parent of `id`, or `None` for the root and for nodes whose parent no
    /// longer exists.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)
            .and_then(Node::parent)
            .filter(|parent| self.node(*parent).is_some())
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    /// Resolve a path against the cursor.
    pub fn resolve(&self, path: &str) -> Result<NodeId, FsError> {
        resolver::resolve(self, self.cursor, path)
    }

    /// Absolute path of a node: names from the root down, joined by the
    /// separator. The root renders as a lone separator.
    pub fn build_path(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if let Some(node) = self.node(current) {
                parts.push(node.name());
            }
            current = parent;
        }
        parts.reverse();
        format!("{}{}", SEPARATOR, parts.join("/"))
    }

    // ========================================================================
    // Arena management
    // ========================================================================

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId { index, generation: slot.generation }
            }
            None => {
                self.slots.push(Slot { generation: 0, node: Some(node) });
                NodeId { index: self.slots.len() - 1, generation: 0 }
            }
        }
    }

    /// Attach a fresh node under `parent` and point its back-reference at
    /// `parent` in one step.
    fn adopt(&mut self, parent: NodeId, kind: NodeKind, name: &str) -> Result<NodeId, FsError> {
        match self.node(parent) {
            Some(dir) if !dir.is_directory() => {
                return Err(FsError::NotADirectory { path: self.build_path(parent) });
            }
            Some(dir) if dir.has_child(name) => {
                return Err(FsError::NodeExists { name: name.to_string() });
            }
            Some(_) => {}
            None => {
                return Err(FsError::PathNotFound {
                    segment: name.to_string(),
                    consumed: self.cursor_path.clone(),
                });
            }
        }

        let mut node = Node::new(kind, name);
        node.set_parent(parent);
        let id = self.alloc(node);
        if let Some(dir) = self.node_mut(parent) {
            dir.attach_child(name, id)?;
        }
        Ok(id)
    }

    /// Release a detached node and everything beneath it. Handles into the
    /// released subtree become stale.
    fn release(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let Some(slot) = self
                .slots
                .get_mut(current.index)
                .filter(|slot| slot.generation == current.generation)
            else {
                continue;
            };
            if let Some(node) = slot.node.take() {
                pending.extend(node.child_ids());
            }
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(current.index);
        }
    }

    // ========================================================================
    // Namespace operations
    // ========================================================================

    /// Child names of a directory, or the node's own name for a file.
    pub fn list(&self, path: &str) -> Result<Vec<String>, FsError> {
        let id = self.resolve(path)?;
        let node = self.expect_live(id, path)?;
        if node.is_directory() {
            Ok(node.child_names())
        } else {
            Ok(vec![node.name().to_string()])
        }
    }

    /// Move the cursor. Files are rejected and the cursor stays put.
    pub fn change_dir(&mut self, path: &str) -> Result<(), FsError> {
        let id = self.resolve(path)?;
        if !self.expect_live(id, path)?.is_directory() {
            return Err(FsError::NotADirectory { path: self.build_path(id) });
        }
        self.cursor = id;
        self.cursor_path = self.build_path(id);
        Ok(())
    }

    /// Create an empty directory under the cursor.
    pub fn make_dir(&mut self, name: &str) -> Result<NodeId, FsError> {
        validate_name(name, "mkdir")?;
        self.adopt(self.cursor, NodeKind::Directory, name)
    }

    /// Create an empty file under the cursor.
    pub fn make_file(&mut self, name: &str) -> Result<NodeId, FsError> {
        validate_name(name, "touch")?;
        self.adopt(self.cursor, NodeKind::File, name)
    }

    /// Remove a directory under the cursor together with its subtree.
    /// Returns whether anything was removed.
    pub fn remove_dir(&mut self, name: &str) -> Result<bool, FsError> {
        self.remove_child(name, "rmdir")
    }

    /// Remove a file or directory under the cursor. Returns whether
    /// anything was removed.
    pub fn remove_node(&mut self, name: &str) -> Result<bool, FsError> {
        self.remove_child(name, "rm")
    }

    fn remove_child(&mut self, name: &str, operation: &str) -> Result<bool, FsError> {
        if name.is_empty() {
            return Err(FsError::EmptyInput { operation: operation.to_string() });
        }
        let cursor = self.cursor;
        let detached = self.node_mut(cursor).and_then(|dir| dir.detach_child(name));
        match detached {
            Some(child) => {
                self.release(child);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the content of the file at `path`.
    pub fn write(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let id = self.resolve(path)?;
        let absolute = self.build_path(id);
        match self.node_mut(id) {
            Some(node) => node.set_content(content).map_err(|_| FsError::WrongNodeKind {
                path: absolute,
                operation: "write".to_string(),
            }),
            None => Err(stale(path)),
        }
    }

    /// Content of the file at `path`.
    pub fn read(&self, path: &str) -> Result<String, FsError> {
        let id = self.resolve(path)?;
        let node = self.expect_live(id, path)?;
        if node.is_directory() {
            return Err(FsError::WrongNodeKind {
                path: self.build_path(id),
                operation: "read".to_string(),
            });
        }
        Ok(node.content().to_string())
    }

    fn expect_live(&self, id: NodeId, path: &str) -> Result<&Node, FsError> {
        self.node(id).ok_or_else(|| stale(path))
    }
}

impl Default for RamFs {
    fn default() -> Self {
        Self::new()
    }
}

fn stale(path: &str) -> FsError {
    FsError::PathNotFound {
        segment: path.to_string(),
        consumed: String::new(),
    }
}

/// A leaf name must be non-empty, free of separators and not one of the
/// reserved `.`/`..` forms, otherwise the resolver could never reach it.
fn validate_name(name: &str, operation: &str) -> Result<(), FsError> {
    if name.is_empty() {
        return Err(FsError::EmptyInput { operation: operation.to_string() });
    }
    if name.contains(SEPARATOR) || name == "." || name == ".." {
        return Err(FsError::InvalidName { name: name.to_string() });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
