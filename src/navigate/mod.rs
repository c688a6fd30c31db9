//! Navigate module
//!
//! Tracks the current working folder of a session and resolves `cd` targets
//! and listings against the tree store.

mod operations;
mod results;

// Re-export public types and functions
pub use operations::{Navigator, PARENT};
pub use results::{CdOutcome, Listing};
