//! Session configuration
//!
//! Values come from built-in defaults, an optional `config.toml`, environment
//! variables prefixed with `VFS_EMU_`, and finally command line flags.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::SessionError;

pub const DEFAULT_CONFIG_NAME: &str = "config";
pub const ENV_PREFIX: &str = "VFS_EMU";
pub const DEFAULT_PROMPT: &str = "$ ";
pub const DEFAULT_MAX_COMMAND_LENGTH: usize = 512;

/// Complete session configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Marker written before every echoed line and after every command
    pub prompt: String,

    /// Interactive lines longer than this many bytes are rejected
    pub max_command_length: usize,

    /// Echo interactive input back to the output
    #[serde(default = "default_echo_input")]
    pub echo_input: bool,

    /// Shown in the banner only; the tree is always built from the seed
    #[serde(default)]
    pub vfs_path: Option<String>,

    /// Startup script run before interactive input
    #[serde(default)]
    pub script_path: Option<String>,
}

fn default_echo_input() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            max_command_length: DEFAULT_MAX_COMMAND_LENGTH,
            echo_input: true,
            vfs_path: None,
            script_path: None,
        }
    }
}

impl SessionConfig {
    /// Load configuration from ./config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, SessionError> {
        Self::load_from(DEFAULT_CONFIG_NAME)
    }

    /// Load configuration from the file `name` (if present) with environment overrides
    pub fn load_from(name: &str) -> Result<Self, SessionError> {
        let settings = Config::builder()
            .set_default("prompt", DEFAULT_PROMPT)?
            .set_default("max_command_length", DEFAULT_MAX_COMMAND_LENGTH as i64)?
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: SessionConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command line flags; a flag that is set wins over file and environment
    pub fn with_overrides(mut self, vfs_path: Option<String>, script_path: Option<String>) -> Self {
        if vfs_path.is_some() {
            self.vfs_path = vfs_path;
        }
        if script_path.is_some() {
            self.script_path = script_path;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.prompt.is_empty() {
            return Err(ConfigError::Message("prompt cannot be empty".into()));
        }

        if self.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("absent");

        let config = SessionConfig::load_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert_eq!(config.max_command_length, DEFAULT_MAX_COMMAND_LENGTH);
        assert!(config.echo_input);
    }

    #[test]
    fn test_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(
            &path,
            "prompt = \"> \"\nmax_command_length = 64\necho_input = false\nscript_path = \"boot.vfs\"\n",
        )
        .unwrap();

        let config = SessionConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.max_command_length, 64);
        assert!(!config.echo_input);
        assert_eq!(config.script_path.as_deref(), Some("boot.vfs"));
        assert_eq!(config.vfs_path, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "max_command_length = 0\n").unwrap();

        let err = SessionConfig::load_from(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SessionError::Config(ConfigError::Message(_))));
        assert_eq!(
            err.to_string(),
            "Configuration error: max_command_length must be greater than 0"
        );
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "prompt = \"unterminated\n").unwrap();

        let err = SessionConfig::load_from(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SessionError::Config(_)));
    }

    #[test]
    fn test_flags_override() {
        let config = SessionConfig {
            script_path: Some("from-file.vfs".into()),
            ..SessionConfig::default()
        };

        let config = config.with_overrides(Some("/tmp/vfs".into()), None);
        assert_eq!(config.vfs_path.as_deref(), Some("/tmp/vfs"));
        assert_eq!(config.script_path.as_deref(), Some("from-file.vfs"));
    }
}
