//! Input validation utilities
//!
//! Provides input validation and sanitization functions.

pub const COMMAND_TOO_LONG: &str = "Command too long";
pub const INVALID_CHARACTER: &str = "Invalid input: NUL character";
pub const INVALID_ENCODING: &str = "Invalid input: not valid UTF-8";

/// Check an interactive line, returning the rejection message on failure
pub fn validate_input(input: &str, max_length: usize) -> Result<(), &'static str> {
    if input.len() > max_length {
        return Err(COMMAND_TOO_LONG);
    }
    if input.contains('\0') {
        return Err(INVALID_CHARACTER);
    }
    Ok(())
}

/// Sanitize a script line
pub fn sanitize_input(input: &str) -> &str {
    input.trim()
}

/// Whether a sanitized script line should be skipped
pub fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}
