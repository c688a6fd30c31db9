//! In-memory tree storage
//!
//! Holds the folder/file tree, its permission metadata and the seed layout
//! every session starts from.

pub mod filesystem;
pub mod node;
pub mod permissions;

pub use filesystem::{ROOT_NAME, Vfs};
pub use node::{Children, Node, NodeKind};
