use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizerError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Roster error: {0}")]
    Roster(String),
    #[error("Malformed archive {}: {reason}", .path.display())]
    MalformedArchive { path: PathBuf, reason: String },
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Directory not empty after merge: {}", .0.display())]
    NonEmptyDirectory(PathBuf),
}

impl OrganizerError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        OrganizerError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Fatal errors stop the run before the target directory is mutated.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            OrganizerError::Configuration(_) | OrganizerError::Roster(_)
        )
    }
}

impl From<csv::Error> for OrganizerError {
    fn from(error: csv::Error) -> Self {
        OrganizerError::Roster(error.to_string())
    }
}

pub type OrganizerResult<T> = Result<T, OrganizerError>;
