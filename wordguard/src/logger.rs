// wordguard/src/logger.rs
//! Logger initialization for the wordguard CLI.
//!
//! Respects `RUST_LOG` unless an explicit level filter is forced by the
//! `--quiet` / `--debug` flags.

use env_logger::Builder;
use log::LevelFilter;

pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    // Tests may initialize the logger more than once.
    let _ = builder.try_init();
}
