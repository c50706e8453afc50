//! Per-run merge log: one line per rename, move, merge, skip or failure.
//!
//! The file is truncated at the start of the run and written line by line,
//! so whatever happened before an interruption is already on disk. The file
//! stays exclusively locked for the run.

use crate::types::errors::{OrganizerError, OrganizerResult};
use std::fs::{File, OpenOptions, TryLockError};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};

/// One logged decision. Never changed after it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    Renamed { folder: String, new_name: String },
    /// Header for a group of moves folding `folder` into `existing`.
    MergeGroup { folder: String, existing: String },
    MergedFolder { source: PathBuf, destination: PathBuf },
    MovedFolder { source: PathBuf, destination: PathBuf },
    MovedFile { source: PathBuf, destination: PathBuf },
    Skipped { folder: String, reason: String },
    Failed { folder: String, error: String },
}

impl MergeAction {
    pub fn to_log_line(&self) -> String {
        match self {
            MergeAction::Renamed { folder, new_name } => {
                format!("\nRENAMED: '{folder}' -> '{new_name}'")
            }
            MergeAction::MergeGroup { folder, existing } => {
                format!("\nMERGE: '{folder}' -> existing '{existing}'")
            }
            MergeAction::MergedFolder {
                source,
                destination,
            } => format!(
                "  Recursively merging folder: {} -> {}",
                source.display(),
                destination.display()
            ),
            MergeAction::MovedFolder {
                source,
                destination,
            } => format!(
                "  Moved folder: {} -> {}",
                source.display(),
                destination.display()
            ),
            MergeAction::MovedFile {
                source,
                destination,
            } => format!(
                "  Moved file: {} -> {}",
                source.display(),
                destination.display()
            ),
            MergeAction::Skipped { folder, reason } => format!("\nSKIPPED: '{folder}' -> {reason}"),
            MergeAction::Failed { folder, error } => format!("\nFAILED: '{folder}' -> {error}"),
        }
    }
}

pub struct ActionLog {
    path: PathBuf,
    writer: LineWriter<File>,
    actions: Vec<MergeAction>,
}

impl ActionLog {
    /// Create (or truncate) the log file and hold an exclusive lock on it
    /// until the log is dropped. A log already locked by another run is an error.
    pub fn create(path: &Path) -> OrganizerResult<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| OrganizerError::io(path, e))?;

        // Truncate only once the lock is held, so a running log is never wiped.
        match file.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => {
                return Err(OrganizerError::io(
                    path,
                    io::Error::new(
                        io::ErrorKind::WouldBlock,
                        "Merge log is in use by another run",
                    ),
                ));
            }
            Err(TryLockError::Error(e)) => return Err(OrganizerError::io(path, e)),
        }
        file.set_len(0).map_err(|e| OrganizerError::io(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: LineWriter::new(file),
            actions: Vec::new(),
        })
    }

    pub fn record(&mut self, action: MergeAction) -> OrganizerResult<()> {
        writeln!(self.writer, "{}", action.to_log_line())
            .map_err(|e| OrganizerError::io(&self.path, e))?;
        self.actions.push(action);
        Ok(())
    }

    pub fn actions(&self) -> &[MergeAction] {
        &self.actions
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close. Dropping without `finish` still flushes, but loses the error.
    pub fn finish(mut self) -> OrganizerResult<Vec<MergeAction>> {
        self.writer
            .flush()
            .map_err(|e| OrganizerError::io(&self.path, e))?;
        Ok(self.actions)
    }
}
