/// File persistence for workflow exports
///
/// Reads the original export, writes the timestamped backup next to it, and saves
/// the patched document back over the original path.

use crate::error::{PatchError, Result};
use crate::workflow::types::WorkflowDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// A workflow export on disk
#[derive(Debug, Clone)]
pub struct WorkflowFile {
    path: PathBuf,
}

impl WorkflowFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw export text
    pub fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(PatchError::WorkflowNotFound(self.path.clone()));
        }

        fs::read_to_string(&self.path).map_err(|source| PatchError::Io {
            action: "read workflow",
            path: self.path.clone(),
            source,
        })
    }

    /// Write `original` byte-for-byte to the backup path for `timestamp_millis`
    pub fn write_backup(&self, original: &str, timestamp_millis: i64) -> Result<PathBuf> {
        let backup = backup_path(&self.path, timestamp_millis);

        fs::write(&backup, original).map_err(|source| PatchError::Io {
            action: "write backup",
            path: backup.clone(),
            source,
        })?;

        Ok(backup)
    }

    /// Overwrite the export with the pretty-printed document
    pub fn save(&self, document: &WorkflowDocument) -> Result<()> {
        let content = document.to_pretty_json()?;

        fs::write(&self.path, content).map_err(|source| PatchError::Io {
            action: "write workflow",
            path: self.path.clone(),
            source,
        })
    }
}

/// Sibling path with `.backup-<millis>.json` in place of the trailing `.json`
///
/// Paths without a `.json` extension get the suffix appended.
pub fn backup_path(workflow_path: &Path, timestamp_millis: i64) -> PathBuf {
    let suffix = format!(".backup-{}.json", timestamp_millis);
    let raw = workflow_path.as_os_str();

    match raw.to_str().and_then(|s| s.strip_suffix(".json")) {
        Some(stem) => PathBuf::from(format!("{}{}", stem, suffix)),
        None => {
            let mut path = raw.to_os_string();
            path.push(&suffix);
            PathBuf::from(path)
        }
    }
}
