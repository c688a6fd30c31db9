//! Command handlers module for the VFS emulator.
//!
//! This module defines one handler per command. Handlers work on the
//! session's tree and working path and turn every outcome, including
//! errors, into a [`CommandResult`] carrying the text to show.

use chrono::Local;
use log::{debug, info};

use crate::error::VfsError;
use crate::error::handlers::{error_to_message, handle_error};
use crate::export::export_to_file;
use crate::protocol::responses::{
    DATE_FORMAT, EXITING, UNIQ_PLACEHOLDER, WHO_USERS, format_cd, format_chmod, format_listing,
    format_saved, format_unknown,
};
use crate::protocol::{Command, CommandResult, parse_command};
use crate::session::SessionState;

/// Parses and executes a single input line.
///
/// Parse and usage errors become failure results without touching `state`.
pub fn execute_line(state: &mut SessionState, line: &str) -> CommandResult {
    match parse_command(line) {
        Ok(command) => {
            debug!("Parsed {:?}", command);
            handle_command(state, &command)
        }
        Err(e) => failure("", e.into()),
    }
}

/// Dispatches a parsed command to its corresponding handler.
///
/// # Arguments
///
/// * `state` - The session's tree and working path.
/// * `command` - Reference to the parsed command.
///
/// # Returns
///
/// * `CommandResult` - Result of the command execution, including status and message.
pub fn handle_command(state: &mut SessionState, command: &Command) -> CommandResult {
    match command {
        Command::Empty => CommandResult::silent(),
        Command::Ls => handle_cmd_ls(state),
        Command::Cd(target) => handle_cmd_cd(state, target),
        Command::Chmod { mode, name } => handle_cmd_chmod(state, mode, name),
        Command::VfsSave(filename) => handle_cmd_vfs_save(state, filename),
        Command::Date => handle_cmd_date(),
        Command::Who => CommandResult::success(WHO_USERS),
        Command::Uniq => CommandResult::success(UNIQ_PLACEHOLDER),
        Command::Exit => handle_cmd_exit(),
        Command::Unknown(cmd) => CommandResult::failure(format_unknown(cmd)),
    }
}

/// Handles the `ls` command: lists the current folder in insertion order.
fn handle_cmd_ls(state: &SessionState) -> CommandResult {
    match state.navigator.list_current(&state.vfs) {
        Ok(listing) => CommandResult::success(format_listing(&listing)),
        Err(e) => failure("ls", e.into()),
    }
}

/// Handles the `cd` command: moves into a child folder or up with `..`.
fn handle_cmd_cd(state: &mut SessionState, target: &str) -> CommandResult {
    match state.navigator.cd(&state.vfs, target) {
        Ok(outcome) => CommandResult::success(format_cd(&outcome)),
        Err(e) => failure("cd", e.into()),
    }
}

/// Handles the `chmod` command: replaces the permission string of a child
/// of the current folder.
fn handle_cmd_chmod(state: &mut SessionState, mode: &str, name: &str) -> CommandResult {
    match state
        .vfs
        .set_permissions(state.navigator.segments(), name, mode)
    {
        Ok(()) => CommandResult::success(format_chmod(name, mode)),
        Err(e) => failure("chmod", e.into()),
    }
}

/// Handles the `vfs-save` command: writes the whole tree to a CSV file.
fn handle_cmd_vfs_save(state: &SessionState, filename: &str) -> CommandResult {
    match export_to_file(&state.vfs, filename) {
        Ok(rows) => {
            info!("Saved {} rows to {}", rows, filename);
            CommandResult::success(format_saved(filename))
        }
        Err(e) => failure("vfs-save", e.into()),
    }
}

fn handle_cmd_date() -> CommandResult {
    CommandResult::success(Local::now().format(DATE_FORMAT).to_string())
}

/// Handles the `exit` command: signals the caller to stop reading lines.
fn handle_cmd_exit() -> CommandResult {
    info!("Exit requested");
    CommandResult::exit(EXITING)
}

fn failure(command: &str, err: VfsError) -> CommandResult {
    handle_error(&err);
    CommandResult::failure(error_to_message(command, &err))
}
