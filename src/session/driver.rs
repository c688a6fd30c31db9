//! Session driver implementation
//!
//! Echoes each input line, executes it against the session state and echoes
//! the result. Holds no domain logic of its own.

use log::{info, warn};
use std::io::{self, Write};
use std::path::Path;

use crate::error::VfsError;
use crate::error::handlers::{error_to_message, handle_error};
use crate::protocol::{CommandStatus, execute_line};
use crate::session::config::SessionConfig;
use crate::session::script::load_script;
use crate::session::state::SessionState;
use crate::utils::validation::{INVALID_ENCODING, is_skippable, sanitize_input, validate_input};

pub const WELCOME: &str = "Welcome to VFS Emulator";
pub const AVAILABLE_COMMANDS: &str =
    "Available commands: ls, cd, vfs-save, date, who, uniq, chmod, exit";

/// One emulator session writing its transcript to `W`.
pub struct Session<W: Write> {
    state: SessionState,
    config: SessionConfig,
    out: W,
    finished: bool,
}

impl<W: Write> Session<W> {
    /// Starts a session on the seed tree.
    pub fn new(config: SessionConfig, out: W) -> Self {
        Self {
            state: SessionState::default(),
            config,
            out,
            finished: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether `exit` has been executed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Writes the banner, runs the configured startup script and, unless the
    /// script exited, leaves a prompt for interactive input.
    pub fn start(&mut self) -> io::Result<()> {
        self.write_banner()?;

        if let Some(script_path) = self.config.script_path.clone() {
            self.run_script(&script_path)?;
        }

        if !self.finished {
            self.write_prompt()?;
        }
        Ok(())
    }

    pub fn write_banner(&mut self) -> io::Result<()> {
        let vfs_path = self.config.vfs_path.as_deref().unwrap_or("None").to_string();
        let script_path = self.config.script_path.as_deref().unwrap_or("None").to_string();

        self.write_line(WELCOME)?;
        self.write_line(&format!("Debug: VFS Path = {}", vfs_path))?;
        self.write_line(&format!("Debug: Script Path = {}", script_path))?;
        self.write_line(AVAILABLE_COMMANDS)?;
        self.write_line("")
    }

    /// Handles one line typed by the user.
    ///
    /// Echoes the line, executes it, echoes any output and writes a fresh
    /// prompt unless the command was `exit`.
    pub fn run_interactive_line(&mut self, line: &str) -> io::Result<CommandStatus> {
        if self.config.echo_input {
            self.echo_input(line)?;
        }

        match validate_input(line, self.config.max_command_length) {
            Ok(()) => {
                let status = self.execute(line)?;
                if !self.finished {
                    self.write_prompt()?;
                }
                Ok(status)
            }
            Err(reason) => {
                warn!("Rejected input of {} bytes: {}", line.len(), reason);
                self.reject_input(reason)
            }
        }
    }

    /// Handles interactive input that could not be decoded as UTF-8.
    pub fn run_undecodable_line(&mut self) -> io::Result<CommandStatus> {
        self.reject_input(INVALID_ENCODING)
    }

    /// Reports `reason` without executing anything and writes a fresh prompt.
    fn reject_input(&mut self, reason: &str) -> io::Result<CommandStatus> {
        self.write_line(reason)?;
        self.write_prompt()?;
        Ok(CommandStatus::Failure(reason.to_string()))
    }

    /// Runs a batch of lines, skipping blank lines and `#` comments.
    ///
    /// A failing line does not stop the batch; `exit` does. Returns the status
    /// of the last executed line.
    pub fn run_batch<I, S>(&mut self, lines: I) -> io::Result<CommandStatus>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut last = CommandStatus::Success;
        for raw in lines {
            let line = sanitize_input(raw.as_ref());
            if is_skippable(line) {
                continue;
            }

            self.echo_input(line)?;
            last = self.execute(line)?;
            if self.finished {
                info!("Batch stopped by exit");
                break;
            }
        }
        Ok(last)
    }

    /// Loads the script at `path` and runs it as a batch.
    ///
    /// A script that cannot be read is reported in the transcript and treated
    /// as an empty batch.
    pub fn run_script(&mut self, path: impl AsRef<Path>) -> io::Result<CommandStatus> {
        match load_script(path) {
            Ok(lines) => self.run_batch(lines),
            Err(e) => {
                let err = VfsError::from(e);
                handle_error(&err);
                let message = error_to_message("", &err);
                self.write_line(&message)?;
                Ok(CommandStatus::Failure(message))
            }
        }
    }

    fn execute(&mut self, line: &str) -> io::Result<CommandStatus> {
        let result = execute_line(&mut self.state, line);
        let text = result.text();
        if !text.is_empty() {
            self.write_line(text)?;
        }
        if result.is_exit() {
            self.finished = true;
        }
        Ok(result.status)
    }

    fn echo_input(&mut self, line: &str) -> io::Result<()> {
        let echoed = format!("{}{}", self.config.prompt, line);
        self.write_line(&echoed)
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        self.out.write_all(self.config.prompt.as_bytes())?;
        self.out.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }
}
