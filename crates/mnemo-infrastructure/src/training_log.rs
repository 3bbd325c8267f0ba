//! Append-only training log.
//!
//! One self-contained JSON record per line, opened in append mode so
//! concurrent appenders never truncate each other's prior data. The log is
//! never rewritten; it is authoritative history independent of the
//! structured store.

use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use tracing::debug;

use mnemo_core::training::TrainingRecord;
use mnemo_core::{MnemoError, Result};

/// Appends training records to a JSONL file.
pub struct TrainingLog {
    path: PathBuf,
}

impl TrainingLog {
    /// Creates a log handle for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log file this handle appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record as a single line.
    ///
    /// # Errors
    ///
    /// Returns `Io` when the filesystem rejects the write; callers log and
    /// continue rather than abort the user-facing turn.
    pub fn append(&self, record: &TrainingRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let line = serde_json::to_string(record)
            .map_err(|e| MnemoError::io(format!("serialize training record: {e}")))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        debug!(path = %self.path.display(), "appended training record");
        Ok(())
    }

    /// Reads all records back, skipping blank lines.
    ///
    /// Used by tests and tooling; the live system only ever appends.
    pub fn read_all(&self) -> Result<Vec<TrainingRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .map_err(|e| MnemoError::io(format!("unparseable training record: {e}")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(n: usize) -> TrainingRecord {
        TrainingRecord {
            instruction: format!("question {n}"),
            output: format!("answer {n}"),
        }
    }

    #[test]
    fn appends_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let log = TrainingLog::new(dir.path().join("train.jsonl"));

        log.append(&record(1)).unwrap();
        log.append(&record(2)).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"instruction":"question 1","output":"answer 1"}"#
        );
    }

    #[test]
    fn append_preserves_prior_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("train.jsonl");

        // A second handle on the same file must not truncate the first
        // handle's data.
        TrainingLog::new(&path).append(&record(1)).unwrap();
        TrainingLog::new(&path).append(&record(2)).unwrap();

        let records = TrainingLog::new(&path).read_all().unwrap();
        assert_eq!(records, vec![record(1), record(2)]);
    }

    #[test]
    fn missing_log_reads_empty() {
        let dir = TempDir::new().unwrap();
        let log = TrainingLog::new(dir.path().join("train.jsonl"));
        assert!(log.read_all().unwrap().is_empty());
    }
}
