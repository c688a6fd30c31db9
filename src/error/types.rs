//! Error types
//!
//! Defines domain-specific error types for each module of the VFS emulator.

use std::fmt;
use std::io;

/// Tree store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A segment of a folder path did not resolve to a folder.
    PathCorruption(String),
    NotFound(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::PathCorruption(p) => write!(f, "Path corruption at: {}", p),
            StorageError::NotFound(n) => write!(f, "No such file or folder: {}", n),
        }
    }
}

impl std::error::Error for StorageError {}

/// Navigate module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateError {
    NotFound(String),
    NotAFolder(String),
    Storage(StorageError),
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::NotFound(n) => write!(f, "No such folder: {}", n),
            NavigateError::NotAFolder(n) => write!(f, "Not a folder: {}", n),
            NavigateError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for NavigateError {}

impl From<StorageError> for NavigateError {
    fn from(error: StorageError) -> Self {
        NavigateError::Storage(error)
    }
}

/// Command line errors raised before anything is executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Malformed quoting or escaping in the input line.
    Parse(String),
    /// A required argument is missing.
    Usage {
        command: String,
        missing: &'static str,
    },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Parse(msg) => write!(f, "parse error: {}", msg),
            ProtocolError::Usage { command, missing } => {
                write!(f, "{}: missing argument {}", command, missing)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Export module errors
#[derive(Debug)]
pub enum ExportError {
    Io { path: String, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io { path, source } => write!(f, "failed to write {}: {}", path, source),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
        }
    }
}

/// Session driver errors
#[derive(Debug)]
pub enum SessionError {
    ScriptNotFound(String),
    IoError(io::Error),
    Config(config::ConfigError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::ScriptNotFound(p) => write!(f, "Script file not found: {}", p),
            SessionError::IoError(e) => write!(f, "I/O error: {}", e),
            SessionError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        SessionError::IoError(error)
    }
}

impl From<config::ConfigError> for SessionError {
    fn from(error: config::ConfigError) -> Self {
        SessionError::Config(error)
    }
}

/// General emulator error that encompasses all error types
#[derive(Debug)]
pub enum VfsError {
    Storage(StorageError),
    Navigate(NavigateError),
    Protocol(ProtocolError),
    Export(ExportError),
    Session(SessionError),
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsError::Storage(e) => write!(f, "Storage error: {}", e),
            VfsError::Navigate(e) => write!(f, "Navigate error: {}", e),
            VfsError::Protocol(e) => write!(f, "Protocol error: {}", e),
            VfsError::Export(e) => write!(f, "Export error: {}", e),
            VfsError::Session(e) => write!(f, "Session error: {}", e),
        }
    }
}

impl std::error::Error for VfsError {}

// Implement conversions from specific errors to VfsError
impl From<StorageError> for VfsError {
    fn from(error: StorageError) -> Self {
        VfsError::Storage(error)
    }
}

impl From<NavigateError> for VfsError {
    fn from(error: NavigateError) -> Self {
        VfsError::Navigate(error)
    }
}

impl From<ProtocolError> for VfsError {
    fn from(error: ProtocolError) -> Self {
        VfsError::Protocol(error)
    }
}

impl From<ExportError> for VfsError {
    fn from(error: ExportError) -> Self {
        VfsError::Export(error)
    }
}

impl From<SessionError> for VfsError {
    fn from(error: SessionError) -> Self {
        VfsError::Session(error)
    }
}
