// wordguard/src/commands/redact.rs
//! The `redact` command: writes a masked copy of the input.

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::RedactCommand;

pub fn run(cmd: &RedactCommand) -> Result<()> {
    let filter = super::build_filter(&cmd.words)?;
    let content = super::read_input(cmd.input_file.as_deref())?;

    let redacted = filter.replace_with_char(&content, cmd.replace_char);

    match &cmd.output_file {
        Some(path) => std::fs::write(path, redacted)
            .with_context(|| format!("Failed to write output file '{}'", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(redacted.as_bytes())
                .context("Failed to write redacted output to stdout")?;
        }
    }
    Ok(())
}
