//! Command language implementation
//!
//! Handles tokenizing, parsing and dispatching of command lines, and the
//! response text each command produces.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;

pub use commands::{Command, CommandResult, CommandStatus};
pub use handlers::{execute_line, handle_command};
pub use parser::{parse_command, tokenize};
