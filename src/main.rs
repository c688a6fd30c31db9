//! VFS Emulator - Entry Point
//!
//! An in-memory virtual filesystem driven by a small shell-like command
//! language, with CSV export of the tree.

use clap::Parser;
use log::{error, info};
use std::io;
use tokio::io::BufReader;

use vfs_emulator::session::run_interactive;
use vfs_emulator::utils::logging::setup_logging;
use vfs_emulator::{Session, SessionConfig};

/// Command line flags
#[derive(Debug, Parser)]
#[command(name = "vfs-emulator", about = "In-memory VFS emulator")]
struct Cli {
    /// Path to VFS folder (shown in the banner)
    #[arg(long)]
    vfs_path: Option<String>,

    /// Path to startup script
    #[arg(long = "script")]
    script: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging();

    let cli = Cli::parse();
    let config = SessionConfig::load()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?
        .with_overrides(cli.vfs_path, cli.script);

    info!("Launching VFS emulator...");

    let mut session = Session::new(config, io::stdout());
    session.start()?;
    run_interactive(&mut session, BufReader::new(tokio::io::stdin())).await?;

    info!("Session ended");
    Ok(())
}
