//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `doh` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Process exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use doh::initialization::init_logger_with;
use doh::{run, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(&config).await {
        Ok(0) => Ok(()),
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("doh error: {:#}", e);
            process::exit(1);
        }
    }
}
