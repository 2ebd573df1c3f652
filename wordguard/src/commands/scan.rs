// wordguard/src/commands/scan.rs
//! The `scan` command: enumerates occurrences as plain lines or JSON.

use anyhow::Result;
use serde::Serialize;
use wordguard_core::WordMatch;

use crate::cli::ScanCommand;

/// JSON shape of a scan run.
#[derive(Debug, Serialize)]
struct ScanReport {
    total: usize,
    matches: Vec<WordMatch>,
}

pub fn run(cmd: &ScanCommand) -> Result<()> {
    let filter = super::build_filter(&cmd.words)?;
    let content = super::read_input(cmd.input_file.as_deref())?;

    let matches: Vec<WordMatch> = if cmd.first {
        filter.find_first(&content).into_iter().collect()
    } else {
        filter.find_all(&content)
    };

    if cmd.json {
        let report = ScanReport {
            total: matches.len(),
            matches,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for m in &matches {
            println!("{}..{}\t{}", m.start, m.end, m.text);
        }
        log::info!("{} occurrence(s) found.", matches.len());
    }
    Ok(())
}
