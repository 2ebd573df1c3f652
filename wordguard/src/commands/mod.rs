// wordguard/src/commands/mod.rs
//! Command implementations and the plumbing they share: building a
//! `WordFilter` from CLI arguments and reading the input text.

pub mod check;
pub mod redact;
pub mod scan;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use wordguard_core::{CaseFolding, FilterConfig, WidthFolding, WordFilter};

use crate::cli::WordListArgs;
use crate::wordlists::FileWordList;

/// Builds a compiled filter from the shared word-list arguments.
pub fn build_filter(args: &WordListArgs) -> Result<WordFilter> {
    let mut config = FilterConfig::new();
    for path in &args.deny {
        config = config.deny_source(FileWordList::new(path.clone()));
    }
    for path in &args.allow {
        config = config.allow_source(FileWordList::new(path.clone()));
    }
    if args.fold_width {
        config = config.normalizer(WidthFolding);
    }
    if args.fold_case {
        config = config.normalizer(CaseFolding);
    }

    let filter = WordFilter::new(config).context("Failed to build the word filter")?;
    info!("Compiled {} sensitive word(s).", filter.word_count());
    Ok(filter)
}

/// Reads the full input text from a file, or from stdin when no path is given.
pub fn read_input(input_file: Option<&Path>) -> Result<String> {
    match input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read input from stdin")?;
            Ok(content)
        }
    }
}
