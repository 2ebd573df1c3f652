// wordguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordguard
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordguard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and redact sensitive words in text",
    long_about = "WordGuard is a command-line utility for detecting, listing, and redacting \
occurrences of a configured set of sensitive words. Deny-lists and allow-lists are plain \
text files with one word per line; optional character folding makes matching robust \
against case and full-width variants.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'wordguard' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wordguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Checks whether the input contains any sensitive word.
    #[command(about = "Checks whether the input contains any sensitive word; exits 1 if it does.")]
    Check(CheckCommand),

    /// Lists every sensitive-word occurrence in the input.
    #[command(about = "Lists every sensitive-word occurrence in the input.")]
    Scan(ScanCommand),

    /// Redacts sensitive words from the input.
    #[command(about = "Redacts sensitive words, preserving the character count of the text.")]
    Redact(RedactCommand),
}

/// Word-list and normalization options shared by all commands.
#[derive(Parser, Debug)]
pub struct WordListArgs {
    /// Deny-list file(s): words to block, one per line.
    #[arg(long = "deny", value_name = "FILE", required = true, help = "Path to a deny-list file (repeatable).")]
    pub deny: Vec<PathBuf>,

    /// Allow-list file(s): exceptions removed from the deny set.
    #[arg(long = "allow", value_name = "FILE", help = "Path to an allow-list file (repeatable).")]
    pub allow: Vec<PathBuf>,

    /// Fold letters to lowercase before matching.
    #[arg(long = "fold-case", help = "Match case-insensitively by folding letters to lowercase.")]
    pub fold_case: bool,

    /// Fold full-width characters to their half-width forms before matching.
    #[arg(long = "fold-width", help = "Fold full-width characters to half-width before matching.")]
    pub fold_width: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub words: WordListArgs,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    #[command(flatten)]
    pub words: WordListArgs,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Report only the first occurrence.
    #[arg(long, help = "Stop at the first occurrence.")]
    pub first: bool,

    /// Emit the matches as JSON.
    #[arg(long, help = "Emit the scan report as JSON.")]
    pub json: bool,
}

/// Arguments for the `redact` command.
#[derive(Parser, Debug)]
pub struct RedactCommand {
    #[command(flatten)]
    pub words: WordListArgs,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write redacted output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write redacted output to a specified file instead of stdout.")]
    pub output_file: Option<PathBuf>,

    /// Character used to mask matched spans.
    #[arg(long = "replace-char", value_name = "CHAR", default_value_t = '*', help = "Character used to mask matched spans.")]
    pub replace_char: char,
}
