//! Error handling
//!
//! Defines error types and handling for the VFS emulator.

pub mod handlers;
pub mod types;

pub use types::*;
