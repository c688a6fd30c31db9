//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env, Target};

/// Setup logging for the emulator
///
/// Honours `RUST_LOG` (default `warn`) and writes to stderr so log lines
/// never mix with the session transcript on stdout.
pub fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();
}
