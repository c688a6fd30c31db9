//! Module `node`
//!
//! Defines the two kinds of entries that make up the tree.

use indexmap::IndexMap;
use std::fmt;

/// Children of a folder, kept in insertion order.
pub type Children = IndexMap<String, Node>;

/// A single entry of the virtual filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Folder {
        permissions: String,
        children: Children,
    },
    File {
        permissions: String,
        content: Vec<u8>,
    },
}

/// Kind of a node, as shown in listings and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Folder => write!(f, "folder"),
        }
    }
}

impl Node {
    /// Creates an empty folder.
    pub fn folder(permissions: impl Into<String>) -> Self {
        Node::Folder {
            permissions: permissions.into(),
            children: Children::new(),
        }
    }

    /// Creates a file holding `content`.
    pub fn file(permissions: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Node::File {
            permissions: permissions.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Folder { .. } => NodeKind::Folder,
            Node::File { .. } => NodeKind::File,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    pub fn permissions(&self) -> &str {
        match self {
            Node::Folder { permissions, .. } | Node::File { permissions, .. } => {
                permissions.as_str()
            }
        }
    }

    /// Returns the children of a folder, or `None` for a file.
    pub fn children(&self) -> Option<&Children> {
        match self {
            Node::Folder { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            Node::Folder { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// Returns the raw bytes of a file, or `None` for a folder.
    pub fn content(&self) -> Option<&[u8]> {
        match self {
            Node::File { content, .. } => Some(content.as_slice()),
            Node::Folder { .. } => None,
        }
    }

    /// Overwrites the permission string; no other field is touched.
    pub(crate) fn set_permissions(&mut self, mode: &str) {
        match self {
            Node::Folder { permissions, .. } | Node::File { permissions, .. } => {
                *permissions = mode.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::File.to_string(), "file");
        assert_eq!(NodeKind::Folder.to_string(), "folder");
    }

    #[test]
    fn test_set_permissions_leaves_content_alone() {
        let mut file = Node::file("rw-r--r--", "Hello");
        file.set_permissions("600");
        assert_eq!(file.permissions(), "600");
        assert_eq!(file.content(), Some(&b"Hello"[..]));
        assert_eq!(file.kind(), NodeKind::File);
    }
}
