// wordguard/src/main.rs
//! WordGuard entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! implementations.

use anyhow::Result;
use clap::Parser;

use wordguard::cli::{Cli, Commands};
use wordguard::commands;
use wordguard::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match &args.command {
        Commands::Check(cmd) => {
            if commands::check::run(cmd)? {
                std::process::exit(1);
            }
        }
        Commands::Scan(cmd) => commands::scan::run(cmd)?,
        Commands::Redact(cmd) => commands::redact::run(cmd)?,
    }

    Ok(())
}
