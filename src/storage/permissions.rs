//! File permissions
//!
//! Permission strings are free-form display metadata; nothing checks them
//! against operations.

use log::info;

use crate::error::StorageError;
use crate::storage::filesystem::Vfs;

impl Vfs {
    /// Overwrites the permissions of `name` inside the folder at `folder_path`.
    ///
    /// Only the permission field changes. Fails with `NotFound` if the folder
    /// has no child called `name`, leaving the tree untouched.
    pub fn set_permissions(
        &mut self,
        folder_path: &[String],
        name: &str,
        mode: &str,
    ) -> Result<(), StorageError> {
        let children = self.children_of_mut(folder_path)?;
        let node = children
            .get_mut(name)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;
        node.set_permissions(mode);

        info!(
            "Changed permissions of {}/{} to {}",
            folder_path.join("/"),
            name,
            mode
        );
        Ok(())
    }

    /// Returns the permissions of `name` inside the folder at `folder_path`.
    pub fn permissions_of(&self, folder_path: &[String], name: &str) -> Result<&str, StorageError> {
        self.children_of(folder_path)?
            .get(name)
            .map(|node| node.permissions())
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }
}
