use std::path::{Path, PathBuf};

/// Supported archive format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
}

impl ArchiveFormat {
    /// Detect format from file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "zip" => Some(Self::Zip),
            _ => None,
        }
    }
}

/// An archive that could not be expanded and was left in place.
#[derive(Debug, Clone)]
pub struct FailedArchive {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a full expansion run over a directory tree.
#[derive(Debug, Clone, Default)]
pub struct ExpansionReport {
    /// Archives expanded and deleted, in processing order.
    pub expanded: Vec<PathBuf>,
    pub failed: Vec<FailedArchive>,
    pub files_extracted: usize,
    /// Number of scans that found at least one archive to try.
    pub passes: usize,
}
