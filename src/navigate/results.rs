//! Result types for navigate operations

/// Result of a successful `cd`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdOutcome {
    /// The working folder changed; holds the new joined path.
    Moved(String),
    /// `..` was requested while already at the root. Nothing changed.
    AlreadyAtRoot,
}

/// Result of listing the current folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    /// Child names in insertion order.
    Names(Vec<String>),
}

impl Listing {
    pub fn names(&self) -> &[String] {
        match self {
            Listing::Empty => &[],
            Listing::Names(names) => names,
        }
    }
}
