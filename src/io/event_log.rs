//! Depot activity log
//!
//! `EventLog` is the record of everything the depot did during a session:
//! loads, insertions, removals, collections and generated reports. It is
//! created once at startup, handed to each component at construction, and
//! written to disk once at shutdown.
//!
//! Clones share the same underlying entries. Every entry is also emitted as
//! a `tracing` debug event so it shows up in diagnostics with `--verbose`.

use crate::types::DepotError;
use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

/// How the log file is opened when saving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Replace any previous contents
    #[default]
    Overwrite,
    /// Add to the end of an existing file
    Append,
}

/// Shared, append-only activity log
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry
    pub fn record(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "depot::events", "{}", message);
        self.entries.borrow_mut().push(message);
    }

    /// Snapshot of all entries in recording order
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Write all entries to `output`, one per line
    pub fn write_to(&self, output: &mut dyn Write) -> Result<(), DepotError> {
        for entry in self.entries.borrow().iter() {
            writeln!(output, "{}", entry)?;
        }
        output.flush()?;
        Ok(())
    }

    /// Save the log to a file
    ///
    /// # Arguments
    ///
    /// * `path` - Destination file, created if missing
    /// * `mode` - Overwrite or append
    ///
    /// # Errors
    ///
    /// Returns `DepotError::IoError` if the file cannot be opened or written.
    pub fn save_to_file(&self, path: &Path, mode: SaveMode) -> Result<(), DepotError> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            SaveMode::Overwrite => options.write(true).truncate(true),
            SaveMode::Append => options.append(true),
        };

        let file = options.open(path).map_err(|e| DepotError::IoError {
            message: format!("Failed to open log file '{}': {}", path.display(), e),
        })?;

        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;

        tracing::info!(path = %path.display(), entries = self.len(), "event log saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_clones_share_entries() {
        let log = EventLog::new();
        let other = log.clone();

        log.record("first");
        other.record("second");

        assert_eq!(log.entries(), vec!["first", "second"]);
        assert_eq!(other.len(), 2);
    }

    #[test]
    fn test_save_overwrite_replaces_contents() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        fs::write(file.path(), "stale\n").unwrap();

        let log = EventLog::new();
        log.record("fresh");
        log.save_to_file(file.path(), SaveMode::Overwrite).unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "fresh\n");
    }

    #[test]
    fn test_save_append_keeps_previous_contents() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        fs::write(file.path(), "earlier\n").unwrap();

        let log = EventLog::new();
        log.record("later");
        log.save_to_file(file.path(), SaveMode::Append).unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "earlier\nlater\n");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let log = EventLog::new();
        let result = log.save_to_file(Path::new("/nonexistent-dir/log.txt"), SaveMode::Overwrite);
        assert!(matches!(result, Err(DepotError::IoError { .. })));
    }
}
