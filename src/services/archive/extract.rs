use super::timestamp::dos_to_file_time;
use super::types::{ExpansionReport, FailedArchive};
use crate::services::fs_utils::file_utils::next_free_path;
use crate::services::scanner::walker;
use crate::types::errors::{OrganizerError, OrganizerResult};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Expand every archive under `root`, including archives that only appear
/// after an outer archive has been expanded.
///
/// Scans the whole tree until a scan finds no archive that has not been tried
/// yet. Nesting depth is not bounded up front. An archive that fails is
/// reported, left in place and not retried, so the loop always ends.
pub fn expand_all(root: &Path) -> OrganizerResult<ExpansionReport> {
    if !root.is_dir() {
        return Err(OrganizerError::Configuration(format!(
            "Target path is not a directory: {}",
            root.display()
        )));
    }

    let mut report = ExpansionReport::default();
    let mut attempted: HashSet<PathBuf> = HashSet::new();

    loop {
        let pending: Vec<PathBuf> = walker::find_archives(root)
            .into_iter()
            .filter(|p| !attempted.contains(p))
            .collect();

        if pending.is_empty() {
            break;
        }
        report.passes += 1;

        for archive_path in pending {
            match expand_or_restore(&archive_path) {
                Ok(count) => {
                    log::info!("Unzipped {} ({count} files)", archive_path.display());
                    report.files_extracted += count;
                    report.expanded.push(archive_path);
                }
                Err(failure) => {
                    log::warn!(
                        "Failed to unzip {} - {}",
                        failure.kept_at.display(),
                        failure.error
                    );
                    attempted.insert(failure.kept_at.clone());
                    report.failed.push(FailedArchive {
                        path: failure.kept_at,
                        reason: failure.error.to_string(),
                    });
                }
            }
        }
    }

    Ok(report)
}

/// Expand one archive into the directory that contains it, then delete it.
///
/// The archive is first renamed to a hidden working name so an entry with the
/// archive's own name cannot truncate it mid-read. On failure the archive is
/// put back under its original name, or under the first free `_N` name when an
/// extracted entry has taken it.
///
/// Returns the number of files written.
pub fn expand_archive(archive_path: &Path) -> OrganizerResult<usize> {
    expand_or_restore(archive_path).map_err(|failure| failure.error)
}

/// A failed expansion and where the untouched archive now lives.
struct ExpansionFailure {
    error: OrganizerError,
    kept_at: PathBuf,
}

fn expand_or_restore(archive_path: &Path) -> Result<usize, ExpansionFailure> {
    let fail_in_place = |error| ExpansionFailure {
        error,
        kept_at: archive_path.to_path_buf(),
    };

    let dest_dir = archive_path.parent().ok_or_else(|| {
        fail_in_place(OrganizerError::Configuration(
            "Archive has no parent directory".into(),
        ))
    })?;
    let file_name = archive_path
        .file_name()
        .ok_or_else(|| {
            fail_in_place(OrganizerError::Configuration(
                "Archive has no file name".into(),
            ))
        })?
        .to_os_string();

    let working_path = dest_dir.join(format!(".{}.expanding", file_name.to_string_lossy()));
    fs::rename(archive_path, &working_path)
        .map_err(|e| fail_in_place(OrganizerError::io(archive_path, e)))?;

    match extract_zip_inner(&working_path, archive_path, dest_dir) {
        Ok(count) => {
            fs::remove_file(&working_path).map_err(|e| ExpansionFailure {
                error: OrganizerError::io(&working_path, e),
                kept_at: working_path.clone(),
            })?;
            Ok(count)
        }
        Err(error) => {
            // An extracted entry may already hold the original name.
            let restore_path = next_free_path(dest_dir, &file_name);
            let kept_at = match fs::rename(&working_path, &restore_path) {
                Ok(()) => {
                    if restore_path != archive_path {
                        log::warn!(
                            "{} is taken by an extracted entry, archive restored as {}",
                            archive_path.display(),
                            restore_path.display()
                        );
                    }
                    restore_path
                }
                Err(restore_err) => {
                    log::error!(
                        "Failed to restore {} after error: {restore_err}",
                        archive_path.display()
                    );
                    working_path
                }
            };
            Err(ExpansionFailure { error, kept_at })
        }
    }
}

fn extract_zip_inner(
    working_path: &Path,
    original_path: &Path,
    dest_dir: &Path,
) -> OrganizerResult<usize> {
    let malformed = |reason: String| OrganizerError::MalformedArchive {
        path: original_path.to_path_buf(),
        reason,
    };

    let file = fs::File::open(working_path).map_err(|e| OrganizerError::io(working_path, e))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| malformed(format!("not a zip file or corrupted: {e}")))?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| malformed(format!("failed to read entry {i}: {e}")))?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                log::warn!("Skipping unsafe entry path '{}'", entry.name());
                continue;
            }
        };

        let output_path = dest_dir.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| OrganizerError::io(&output_path, e))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|e| OrganizerError::io(parent, e))?;
            }
            let mut outfile =
                fs::File::create(&output_path).map_err(|e| OrganizerError::io(&output_path, e))?;
            io::copy(&mut entry, &mut outfile).map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => malformed(format!("corrupt entry {i}: {e}")),
                _ => OrganizerError::io(&output_path, e),
            })?;
            count += 1;
        }

        if let Some(stamp) = entry.last_modified().and_then(dos_to_file_time) {
            if let Err(e) = filetime::set_file_times(&output_path, stamp, stamp) {
                log::warn!(
                    "Failed to restore timestamp on {}: {e}",
                    output_path.display()
                );
            }
        }
    }
    Ok(count)
}
