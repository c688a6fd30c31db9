//! Module `command`
//!
//! Defines the commands of the emulator's command language and the result
//! every command execution produces.

/// Represents a command parsed from one input line.
///
/// Commands that require arguments store them as `String` fields. Extra
/// arguments beyond the required ones are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,                                // Blank line, nothing to do
    Ls,                                   // List current folder
    Cd(String),                           // Change working folder
    Chmod { mode: String, name: String }, // Change permissions
    VfsSave(String),                      // Export tree to a CSV file
    Date,                                 // Local time
    Who,                                  // Logged in users
    Uniq,                                 // Placeholder
    Exit,                                 // End the session
    Unknown(String),                      // Unknown command word
}

/// Represents the outcome status of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    /// The caller should stop reading further lines.
    Exit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    /// A failed command; `message` is both the reason and the text shown.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: CommandStatus::Failure(message.clone()),
            message: Some(message),
        }
    }

    /// Successful command with no output, e.g. a blank line.
    pub fn silent() -> Self {
        Self {
            status: CommandStatus::Success,
            message: None,
        }
    }

    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Exit,
            message: Some(message.into()),
        }
    }

    pub fn is_exit(&self) -> bool {
        self.status == CommandStatus::Exit
    }

    /// Text to show the user, empty when the command printed nothing.
    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}
