//! Error handlers
//!
//! Logs errors and turns them into the single line a user sees.

use crate::error::types::{NavigateError, StorageError, VfsError};
use log::{error, warn};

/// Handle an emulator error
///
/// User mistakes are logged as warnings; failures of the host or of the tree
/// itself are logged as errors.
pub fn handle_error(err: &VfsError) {
    match err {
        VfsError::Protocol(_)
        | VfsError::Navigate(NavigateError::NotFound(_) | NavigateError::NotAFolder(_))
        | VfsError::Storage(StorageError::NotFound(_)) => warn!("Command rejected: {}", err),
        _ => error!("VFS Emulator Error: {}", err),
    }
}

/// Convert error to the user-visible response line for `command`
pub fn error_to_message(command: &str, err: &VfsError) -> String {
    match err {
        VfsError::Protocol(e) => e.to_string(),
        VfsError::Navigate(NavigateError::NotFound(name)) => {
            format!("{}: no such folder: {}", command, name)
        }
        VfsError::Navigate(NavigateError::NotAFolder(name)) => {
            format!("{}: not a folder: {}", command, name)
        }
        VfsError::Navigate(NavigateError::Storage(e)) => storage_message(command, e),
        VfsError::Storage(e) => storage_message(command, e),
        VfsError::Export(e) => format!("{}: {}", command, e),
        VfsError::Session(e) => e.to_string(),
    }
}

fn storage_message(command: &str, err: &StorageError) -> String {
    match err {
        StorageError::NotFound(name) => format!("{}: no such file or folder: {}", command, name),
        StorageError::PathCorruption(path) => format!("{}: path corruption at: {}", command, path),
    }
}
