//! readgen CLI entry point
//!
//! Parses command-line arguments, applies environment configuration, sets up
//! logging, and runs the generator. Errors surfacing here are converted to a
//! user-friendly report before the process exits non-zero.

use anyhow::Result;
use clap::Parser;
use readgen::cli;
use readgen::core::error::user_friendly_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Apply verbosity/progress settings to the environment before the
    // subscriber reads RUST_LOG
    cli.config().apply_to_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(_) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
