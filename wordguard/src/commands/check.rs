// wordguard/src/commands/check.rs
//! The `check` command: containment query with a shell-friendly exit code.

use anyhow::Result;
use log::info;

use crate::cli::CheckCommand;

/// Returns `true` when the input contains at least one sensitive word.
pub fn run(cmd: &CheckCommand) -> Result<bool> {
    let filter = super::build_filter(&cmd.words)?;
    let content = super::read_input(cmd.input_file.as_deref())?;

    let found = filter.contains(&content);
    if found {
        info!("Sensitive content detected.");
    } else {
        info!("No sensitive content detected.");
    }
    Ok(found)
}
