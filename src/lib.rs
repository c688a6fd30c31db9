pub mod error;
pub mod export;
pub mod navigate;
pub mod protocol;
pub mod session;
pub mod storage;
pub mod utils;

pub use session::{Session, SessionConfig, SessionState};
pub use storage::Vfs;
