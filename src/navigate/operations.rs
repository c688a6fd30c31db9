//! Navigation operations implementation

use log::{debug, info};

use crate::error::NavigateError;
use crate::navigate::results::{CdOutcome, Listing};
use crate::storage::{ROOT_NAME, Vfs};

/// `cd` target that moves one level up.
pub const PARENT: &str = "..";

/// Stack of folder names from the root down to the current folder.
///
/// Only ever extended with names verified to be folders and only ever
/// shortened by popping, so it always resolves against the tree it was
/// checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    segments: Vec<String>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(ROOT_NAME)
    }
}

impl Navigator {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            segments: vec![root_name.into()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_at_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Segments joined with `/`, e.g. `root/folder1`.
    pub fn current_path_string(&self) -> String {
        self.segments.join("/")
    }

    /// Changes the working folder.
    ///
    /// `..` pops one level (a no-op at the root). Any other target must name a
    /// folder inside the current folder. On error the path is unchanged.
    pub fn cd(&mut self, vfs: &Vfs, target: &str) -> Result<CdOutcome, NavigateError> {
        if target == PARENT {
            if self.is_at_root() {
                debug!("cd .. ignored at root");
                return Ok(CdOutcome::AlreadyAtRoot);
            }
            self.segments.pop();
            info!("Changed directory up to {}", self.current_path_string());
            return Ok(CdOutcome::Moved(self.current_path_string()));
        }

        let children = vfs.children_of(&self.segments)?;
        match children.get(target) {
            None => Err(NavigateError::NotFound(target.to_string())),
            Some(node) if !node.is_folder() => Err(NavigateError::NotAFolder(target.to_string())),
            Some(_) => {
                self.segments.push(target.to_string());
                info!("Changed directory to {}", self.current_path_string());
                Ok(CdOutcome::Moved(self.current_path_string()))
            }
        }
    }

    /// Lists the names in the current folder, in insertion order.
    pub fn list_current(&self, vfs: &Vfs) -> Result<Listing, NavigateError> {
        let children = vfs.children_of(&self.segments)?;
        if children.is_empty() {
            return Ok(Listing::Empty);
        }
        Ok(Listing::Names(children.keys().cloned().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Node;

    #[test]
    fn test_cd_into_folder_and_back() {
        let vfs = Vfs::seeded();
        let mut nav = Navigator::default();

        assert_eq!(
            nav.cd(&vfs, "folder1").unwrap(),
            CdOutcome::Moved("root/folder1".into())
        );
        assert_eq!(nav.current_path_string(), "root/folder1");

        assert_eq!(nav.cd(&vfs, "..").unwrap(), CdOutcome::Moved("root".into()));
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_cd_parent_at_root_is_noop() {
        let vfs = Vfs::seeded();
        let mut nav = Navigator::default();
        assert_eq!(nav.cd(&vfs, "..").unwrap(), CdOutcome::AlreadyAtRoot);
        assert_eq!(nav.segments(), ["root"]);
    }

    #[test]
    fn test_cd_errors_keep_path() {
        let vfs = Vfs::seeded();
        let mut nav = Navigator::default();

        assert_eq!(
            nav.cd(&vfs, "missing"),
            Err(NavigateError::NotFound("missing".into()))
        );
        assert_eq!(
            nav.cd(&vfs, "file1.txt"),
            Err(NavigateError::NotAFolder("file1.txt".into()))
        );
        assert_eq!(nav.current_path_string(), "root");
    }

    #[test]
    fn test_list_current_preserves_order() {
        let vfs = Vfs::seeded();
        let mut nav = Navigator::default();
        assert_eq!(
            nav.list_current(&vfs).unwrap(),
            Listing::Names(vec!["folder1".into(), "file1.txt".into()])
        );

        nav.cd(&vfs, "folder1").unwrap();
        assert_eq!(nav.list_current(&vfs).unwrap().names(), ["file2.txt"]);
    }

    #[test]
    fn test_list_empty_folder() {
        let mut vfs = Vfs::seeded();
        vfs.insert(&["root".to_string()], "empty", Node::folder("rwx"))
            .unwrap();
        let mut nav = Navigator::default();
        nav.cd(&vfs, "empty").unwrap();
        assert_eq!(nav.list_current(&vfs).unwrap(), Listing::Empty);
    }
}
