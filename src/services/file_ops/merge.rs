use super::action_log::{ActionLog, MergeAction};
use crate::services::fs_utils::file_utils::{move_path, next_free_path, remove_empty_dir};
use crate::types::errors::{OrganizerError, OrganizerResult};
use std::fs;
use std::path::Path;

/// Fold the contents of `source_dir` into `dest_dir`, then remove `source_dir`.
///
/// Entries are handled in directory-listing order:
/// - sub-directory with a same-named directory in `dest_dir`: merged recursively
/// - sub-directory otherwise: moved whole (to `name_N` if a file holds the name)
/// - file: moved, to `base_N.ext` if the name is taken. Nothing is overwritten.
///
/// Each move is logged before it is made, so the log never misses a completed move.
/// The final removal fails with `NonEmptyDirectory` rather than deleting leftovers.
pub fn merge_into(source_dir: &Path, dest_dir: &Path, log: &mut ActionLog) -> OrganizerResult<()> {
    merge_contents(source_dir, dest_dir, log)?;
    remove_empty_dir(source_dir)
}

fn merge_contents(source_dir: &Path, dest_dir: &Path, log: &mut ActionLog) -> OrganizerResult<()> {
    // Snapshot first: entries are moved out while we go.
    let entries = fs::read_dir(source_dir)
        .and_then(|rd| rd.collect::<Result<Vec<_>, _>>())
        .map_err(|e| OrganizerError::io(source_dir, e))?;

    for entry in entries {
        let src_path = entry.path();
        let name = entry.file_name();
        let file_type = entry
            .file_type()
            .map_err(|e| OrganizerError::io(&src_path, e))?;

        let same_name = dest_dir.join(&name);

        if file_type.is_dir() && same_name.is_dir() {
            log.record(MergeAction::MergedFolder {
                source: src_path.clone(),
                destination: same_name.clone(),
            })?;
            merge_contents(&src_path, &same_name, log)?;
            remove_empty_dir(&src_path)?;
            continue;
        }

        let target = next_free_path(dest_dir, &name);
        let action = if file_type.is_dir() {
            MergeAction::MovedFolder {
                source: src_path.clone(),
                destination: target.clone(),
            }
        } else {
            MergeAction::MovedFile {
                source: src_path.clone(),
                destination: target.clone(),
            }
        };
        log.record(action)?;
        move_path(&src_path, &target)?;
    }

    Ok(())
}
