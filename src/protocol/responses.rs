//! Response text
//!
//! Fixed response strings and formatting of command output.

use crate::navigate::{CdOutcome, Listing};

pub const ALREADY_AT_ROOT: &str = "Already at root";
pub const EMPTY_LISTING: &str = "(empty)";
pub const EXITING: &str = "Exiting...";
pub const WHO_USERS: &str = "user1  user2  user3";
pub const UNIQ_PLACEHOLDER: &str = "(uniq command placeholder)";

/// `date` output format, e.g. `2024-03-01 14:05:09`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator between names in `ls` output.
const LISTING_SEPARATOR: &str = "  ";

/// Format the result of a `cd`
pub fn format_cd(outcome: &CdOutcome) -> String {
    match outcome {
        CdOutcome::Moved(path) => format!("Current path: {}", path),
        CdOutcome::AlreadyAtRoot => ALREADY_AT_ROOT.to_string(),
    }
}

/// Format a folder listing for `ls`
pub fn format_listing(listing: &Listing) -> String {
    match listing {
        Listing::Empty => EMPTY_LISTING.to_string(),
        Listing::Names(names) => names.join(LISTING_SEPARATOR),
    }
}

pub fn format_chmod(name: &str, mode: &str) -> String {
    format!("{} permissions changed to {}", name, mode)
}

pub fn format_saved(filename: &str) -> String {
    format!("VFS saved to {}", filename)
}

pub fn format_unknown(cmd: &str) -> String {
    format!("Unknown command: {}", cmd)
}
