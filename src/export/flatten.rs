//! Depth-first flattening of the tree into export rows.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::storage::{Node, NodeKind, Vfs};

/// One exported node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// `/`-joined names from the root, e.g. `root/folder1/file2.txt`.
    pub path: String,
    pub kind: NodeKind,
    /// Base64 of the file bytes; empty for folders.
    pub content: String,
    pub permissions: String,
}

impl Row {
    /// Fields in export column order.
    pub fn fields(&self) -> [String; 4] {
        [
            self.path.clone(),
            self.kind.to_string(),
            self.content.clone(),
            self.permissions.clone(),
        ]
    }
}

/// Flattens `vfs` in pre-order: every folder is followed by its children in
/// insertion order, starting with the root itself.
pub fn flatten(vfs: &Vfs) -> Vec<Row> {
    let mut rows = Vec::with_capacity(vfs.node_count());
    visit(vfs.root_name().to_string(), vfs.root(), &mut rows);
    rows
}

fn visit(path: String, node: &Node, rows: &mut Vec<Row>) {
    match node {
        Node::File {
            permissions,
            content,
        } => rows.push(Row {
            path,
            kind: NodeKind::File,
            content: STANDARD.encode(content),
            permissions: permissions.clone(),
        }),
        Node::Folder {
            permissions,
            children,
        } => {
            rows.push(Row {
                path: path.clone(),
                kind: NodeKind::Folder,
                content: String::new(),
                permissions: permissions.clone(),
            });
            for (name, child) in children {
                visit(format!("{}/{}", path, name), child, rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_seeded_tree_in_pre_order() {
        let rows = flatten(&Vfs::seeded());
        let paths: Vec<&str> = rows.iter().map(|row| row.path.as_str()).collect();
        assert_eq!(
            paths,
            ["root", "root/folder1", "root/folder1/file2.txt", "root/file1.txt"]
        );

        assert_eq!(rows[0].kind, NodeKind::Folder);
        assert_eq!(rows[0].content, "");
        assert_eq!(rows[0].permissions, "rwxr-xr-x");
        assert_eq!(rows[3].kind, NodeKind::File);
        assert_eq!(rows[3].permissions, "rw-r--r--");
    }

    #[test]
    fn test_flatten_one_row_per_node_and_content_round_trips() {
        let mut vfs = Vfs::seeded();
        let root = vec!["root".to_string()];
        vfs.insert(&root, "binary.bin", Node::file("r--", vec![0u8, 255, 10, 44, 34]))
            .unwrap();
        vfs.insert(&root, "empty", Node::folder("rwx")).unwrap();

        let rows = flatten(&vfs);
        assert_eq!(rows.len(), vfs.node_count());

        let root_children = vfs.children_of(&root).unwrap();
        let inner = vfs
            .children_of(&["root".to_string(), "folder1".to_string()])
            .unwrap();
        for row in rows.iter().filter(|row| row.kind == NodeKind::File) {
            let name = row.path.rsplit('/').next().unwrap();
            let node = root_children.get(name).or_else(|| inner.get(name)).unwrap();
            assert_eq!(STANDARD.decode(&row.content).unwrap(), node.content().unwrap());
        }
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let vfs = Vfs::seeded();
        assert_eq!(flatten(&vfs), flatten(&vfs));
    }
}
