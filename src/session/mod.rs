//! Session driver
//!
//! Owns the state of one emulator session and feeds it lines, either from an
//! interactive source or from a startup script, echoing input and output.

pub mod config;
pub mod driver;
pub mod handler;
pub mod script;
pub mod state;

pub use self::config::SessionConfig;
pub use driver::Session;
pub use handler::run_interactive;
pub use script::load_script;
pub use state::SessionState;
