//! CSV encoding of export rows.
//!
//! Minimal quoting: a field is wrapped in double quotes only when it contains
//! the delimiter, a quote or a line break, and embedded quotes are doubled.
//! Records end with `\r\n`.

use log::{error, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::export::flatten::{Row, flatten};
use crate::storage::Vfs;

/// Column names, written as the first record.
pub const HEADER: [&str; 4] = ["path", "type", "content", "permissions"];

const DELIMITER: char = ',';
const QUOTE: char = '"';
const LINE_TERMINATOR: &str = "\r\n";

fn escape_field(raw: &str) -> String {
    if raw.contains([DELIMITER, QUOTE, '\r', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

fn encode_record<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(|field| escape_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    line.push_str(LINE_TERMINATOR);
    line
}

/// Encodes one row as a terminated CSV record.
pub fn encode_row(row: &Row) -> String {
    encode_record(&row.fields()[..])
}

/// Writes the header followed by every row to `writer`.
pub fn write_rows<W: Write>(rows: &[Row], writer: &mut W) -> io::Result<()> {
    writer.write_all(encode_record(&HEADER[..]).as_bytes())?;
    for row in rows {
        writer.write_all(encode_row(row).as_bytes())?;
    }
    writer.flush()
}

/// Flattens `vfs` and writes it to `path` in one go.
///
/// Returns the number of rows written, header excluded.
pub fn export_to_file(vfs: &Vfs, path: impl AsRef<Path>) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let rows = flatten(vfs);

    let mut buffer = Vec::new();
    write_rows(&rows, &mut buffer).map_err(|e| io_error(path, e))?;
    fs::write(path, buffer).map_err(|e| {
        error!("Failed to export VFS to {}: {}", path.display(), e);
        io_error(path, e)
    })?;

    info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

fn io_error(path: &Path, source: io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}
