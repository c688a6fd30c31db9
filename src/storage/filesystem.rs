//! Tree store
//!
//! Owns the root folder and resolves folder paths against it.

use log::{debug, error};

use crate::error::StorageError;
use crate::storage::node::{Children, Node};

/// Name of the root folder every path starts with.
pub const ROOT_NAME: &str = "root";

const FOLDER_PERMISSIONS: &str = "rwxr-xr-x";
const FILE_PERMISSIONS: &str = "rw-r--r--";

/// The whole virtual filesystem of one session.
///
/// Paths are slices of names whose first element is the root's own name,
/// e.g. `["root", "folder1"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vfs {
    root_name: String,
    root: Node,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Vfs {
    /// Creates a tree holding a single empty root folder.
    pub fn new(root_name: impl Into<String>, permissions: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            root: Node::folder(permissions),
        }
    }

    /// Builds the fixed layout a session starts with:
    ///
    /// ```text
    /// root/
    ///   folder1/
    ///     file2.txt
    ///   file1.txt
    /// ```
    pub fn seeded() -> Self {
        let mut vfs = Self::new(ROOT_NAME, FOLDER_PERMISSIONS);
        let root = [ROOT_NAME.to_string()];
        let folder1 = [ROOT_NAME.to_string(), "folder1".to_string()];

        let built = vfs
            .insert(&root, "folder1", Node::folder(FOLDER_PERMISSIONS))
            .and_then(|_| {
                vfs.insert(
                    &folder1,
                    "file2.txt",
                    Node::file(FILE_PERMISSIONS, "Hello from file2"),
                )
            })
            .and_then(|_| {
                vfs.insert(
                    &root,
                    "file1.txt",
                    Node::file(FILE_PERMISSIONS, "Hello from file1"),
                )
            });
        if let Err(e) = built {
            error!("Failed to build seed tree: {}", e);
        }
        vfs
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the children of the folder at `path`.
    ///
    /// Fails with `PathCorruption` if the path is empty, does not start at the
    /// root, or walks through a missing name or a file.
    pub fn children_of(&self, path: &[String]) -> Result<&Children, StorageError> {
        let mut node = self.start(path)?;
        for (depth, name) in path.iter().enumerate().skip(1) {
            node = node
                .children()
                .and_then(|children| children.get(name))
                .ok_or_else(|| corruption(path, depth))?;
        }
        node.children().ok_or_else(|| corruption(path, path.len() - 1))
    }

    /// Mutable variant of [`Vfs::children_of`].
    pub(crate) fn children_of_mut(
        &mut self,
        path: &[String],
    ) -> Result<&mut Children, StorageError> {
        self.start(path)?;
        let mut node = &mut self.root;
        for (depth, name) in path.iter().enumerate().skip(1) {
            node = node
                .children_mut()
                .and_then(|children| children.get_mut(name))
                .ok_or_else(|| corruption(path, depth))?;
        }
        node.children_mut().ok_or_else(|| corruption(path, path.len() - 1))
    }

    /// Places `node` under `name` in the folder at `folder_path`.
    ///
    /// An existing entry with the same name is replaced in place and returned.
    pub fn insert(
        &mut self,
        folder_path: &[String],
        name: impl Into<String>,
        node: Node,
    ) -> Result<Option<Node>, StorageError> {
        let name = name.into();
        debug!("Inserting {} {} under {}", node.kind(), name, folder_path.join("/"));
        let children = self.children_of_mut(folder_path)?;
        Ok(children.insert(name, node))
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            1 + node
                .children()
                .map(|children| children.values().map(count).sum())
                .unwrap_or(0)
        }
        count(&self.root)
    }

    fn start(&self, path: &[String]) -> Result<&Node, StorageError> {
        match path.first() {
            Some(first) if *first == self.root_name => Ok(&self.root),
            _ => Err(corruption(path, 0)),
        }
    }
}

fn corruption(path: &[String], depth: usize) -> StorageError {
    let upto = (depth + 1).min(path.len());
    StorageError::PathCorruption(path[..upto].join("/"))
}
