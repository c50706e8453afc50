use crate::services::fs_utils::file_utils::next_free_path;
use crate::services::fs_utils::path_utils::flatten_relative_path;
use crate::services::scanner::walker;
use crate::types::errors::{OrganizerError, OrganizerResult};
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of backing up the archives of a target directory.
#[derive(Debug, Clone)]
pub struct BackupResult {
    pub backup_dir: PathBuf,
    pub copied: Vec<PathBuf>,
}

/// Copy every archive under `target_dir` into `<parent of target>/<backup_dir_name>`.
///
/// Nested paths are flattened into the file name (`a/b/c.zip` → `a_b_c.zip`).
/// A flattened name that is already taken, by another archive or an earlier
/// backup, gets a `_N` suffix. Existing backups are never overwritten. Copies keep the source modification time. Any copy failure aborts, since
/// expansion deletes the originals afterwards.
pub fn backup_archives(target_dir: &Path, backup_dir_name: &str) -> OrganizerResult<BackupResult> {
    let target = fs::canonicalize(target_dir).map_err(|e| OrganizerError::io(target_dir, e))?;
    let parent = target.parent().ok_or_else(|| {
        OrganizerError::Configuration(format!(
            "Target directory has no parent for backups: {}",
            target.display()
        ))
    })?;

    let backup_dir = parent.join(backup_dir_name);
    fs::create_dir_all(&backup_dir).map_err(|e| OrganizerError::io(&backup_dir, e))?;

    let mut copied = Vec::new();
    for archive_path in walker::find_archives(&target) {
        let rel_path = archive_path
            .strip_prefix(&target)
            .unwrap_or(archive_path.as_path());
        let backup_path = next_free_path(&backup_dir, flatten_relative_path(rel_path));

        fs::copy(&archive_path, &backup_path).map_err(|e| OrganizerError::io(&archive_path, e))?;

        let meta = fs::metadata(&archive_path).map_err(|e| OrganizerError::io(&archive_path, e))?;
        let mtime = FileTime::from_last_modification_time(&meta);
        if let Err(e) = filetime::set_file_mtime(&backup_path, mtime) {
            log::warn!("Failed to copy timestamp to {}: {e}", backup_path.display());
        }

        log::info!("Backup created: {}", backup_path.display());
        copied.push(backup_path);
    }

    Ok(BackupResult { backup_dir, copied })
}
