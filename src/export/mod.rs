//! Tree export
//!
//! Flattens the tree into rows and writes them out as CSV with base64 file
//! content.

pub mod csv;
pub mod flatten;

pub use csv::{HEADER, encode_row, export_to_file, write_rows};
pub use flatten::{Row, flatten};
