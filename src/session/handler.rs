//! Interactive input loop
//!
//! Reads lines from an async source and hands each one to the session until
//! `exit` or end of input.

use log::{info, warn};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::session::driver::Session;

/// Handles an interactive session using the Tokio runtime.
///
/// - Reads one line at a time; the next line is only read after the previous
///   command has completed.
/// - A line that is not valid UTF-8 is reported and skipped.
/// - Stops after `exit` or when the input is closed.
pub async fn run_interactive<R, W>(session: &mut Session<W>, mut input: R) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    while !session.is_finished() {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed");
            break;
        }

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        match std::str::from_utf8(raw) {
            Ok(line) => {
                session.run_interactive_line(line)?;
            }
            Err(e) => {
                warn!("Skipping undecodable input line: {}", e);
                session.run_undecodable_line()?;
            }
        }
    }

    Ok(())
}
