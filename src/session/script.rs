//! Startup script loading

use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::SessionError;

/// Reads every line of the script at `path`.
///
/// A missing file is reported as `ScriptNotFound`; other read failures as
/// `IoError`.
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<String>, SessionError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            info!("Loaded script {} ({} lines)", path.display(), lines.len());
            Ok(lines)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Script {} not found", path.display());
            Err(SessionError::ScriptNotFound(path.display().to_string()))
        }
        Err(e) => Err(SessionError::IoError(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_script_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("start.vfs");
        fs::write(&path, "# setup\nls\r\n\ncd folder1\n").unwrap();

        assert_eq!(
            load_script(&path).unwrap(),
            ["# setup", "ls", "", "cd folder1"]
        );
    }

    #[test]
    fn test_load_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.vfs");

        match load_script(&path) {
            Err(SessionError::ScriptNotFound(p)) => assert_eq!(p, path.display().to_string()),
            other => panic!("expected ScriptNotFound, got {:?}", other),
        }
    }
}
