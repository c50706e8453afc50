//! File system walker for the submission directory.
//! Uses `walkdir` for recursive traversal; every path is built from the passed-in root.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::services::archive::ArchiveFormat;
use crate::types::errors::{OrganizerError, OrganizerResult};

/// A top-level submission folder under the target directory.
#[derive(Debug, Clone)]
pub struct SubmissionFolder {
    /// Absolute path to the folder.
    pub path: PathBuf,
    /// Raw folder name as-is from the filesystem.
    pub raw_name: String,
}

/// List the immediate child directories of `target_dir`, sorted by name.
///
/// Files (the merge log, the report, stray uploads) are ignored.
pub fn scan_submission_folders(target_dir: &Path) -> OrganizerResult<Vec<SubmissionFolder>> {
    if !target_dir.is_dir() {
        return Err(OrganizerError::Configuration(format!(
            "Target path is not a directory: {}",
            target_dir.display()
        )));
    }

    let entries = std::fs::read_dir(target_dir).map_err(|e| OrganizerError::io(target_dir, e))?;

    let mut folders = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let raw_name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };

        folders.push(SubmissionFolder { path, raw_name });
    }

    folders.sort_by(|a, b| a.raw_name.cmp(&b.raw_name));
    Ok(folders)
}

/// Find every supported archive under `root`, at any depth.
///
/// Symlinks are not followed.
pub fn find_archives(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping unreadable path during archive scan: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| ArchiveFormat::from_path(entry.path()).is_some())
        .map(|entry| entry.into_path())
        .collect()
}
