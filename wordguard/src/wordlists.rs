// wordguard/src/wordlists.rs
//! File-backed word sources for the CLI.
//!
//! Word-list files contain one word per line; blank lines and `#` comments
//! are skipped. The same file format serves deny-lists and allow-lists.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;
use wordguard_core::{parse_word_lines, AllowSource, DenySource};

/// A word list loaded from a plain text file on every (re)build.
#[derive(Debug, Clone)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read word list '{}'", self.path.display()))?;
        let words = parse_word_lines(&content);
        debug!("Loaded {} word(s) from '{}'.", words.len(), self.path.display());
        Ok(words)
    }
}

impl DenySource for FileWordList {
    fn words(&self) -> Result<Vec<String>> {
        self.load()
    }
}

impl AllowSource for FileWordList {
    fn words(&self) -> Result<Vec<String>> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_reports_its_path() {
        let list = FileWordList::new(PathBuf::from("/no/such/wordlist.txt"));
        let err = DenySource::words(&list).unwrap_err();
        assert!(err.to_string().contains("/no/such/wordlist.txt"));
    }

    #[test]
    fn test_loads_words_skipping_comments() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# list\nbadword\n\nsecret").unwrap();
        let list = FileWordList::new(file.path().to_path_buf());
        assert_eq!(DenySource::words(&list).unwrap(), vec!["badword", "secret"]);
    }
}
