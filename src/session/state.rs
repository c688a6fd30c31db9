//! Module `state`
//!
//! Defines the `SessionState` struct: the tree and the working path of one
//! session. All commands read and mutate the session through it.

use crate::navigate::Navigator;
use crate::storage::Vfs;

/// Represents the mutable state of a single session.
///
/// The tree is exclusively owned here; nothing else holds a reference to it
/// between commands.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) vfs: Vfs,
    pub(crate) navigator: Navigator,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Vfs::seeded())
    }
}

impl SessionState {
    /// Starts a session on `vfs` with the working path at its root.
    pub fn new(vfs: Vfs) -> Self {
        let navigator = Navigator::new(vfs.root_name());
        Self { vfs, navigator }
    }

    /// Returns the session's tree.
    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    /// Returns the session's working path.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}
