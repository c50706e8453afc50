use super::path_utils::suffixed_name;
use crate::types::errors::{OrganizerError, OrganizerResult};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Move a file or directory with `fs::rename`, falling back to copy + delete
/// through `fs_extra` when the rename fails (cross-device moves).
///
/// Never overwrites: an occupied destination is an error.
pub fn move_path(from: &Path, to: &Path) -> OrganizerResult<()> {
    if to.symlink_metadata().is_ok() {
        return Err(OrganizerError::io(
            to,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Destination already exists",
            ),
        ));
    }

    let rename_err = match fs::rename(from, to) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    log::warn!(
        "fs::rename failed (cross-device?): {rename_err}. Attempting fallback move of {}",
        from.display()
    );

    if !from.exists() {
        return Err(OrganizerError::io(from, rename_err));
    }

    let result = if from.is_dir() {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.copy_inside = true;
        fs_extra::dir::move_dir(from, to, &options).map(|_| ())
    } else {
        let options = fs_extra::file::CopyOptions::new();
        fs_extra::file::move_file(from, to, &options).map(|_| ())
    };

    result.map_err(|err| OrganizerError::io(from, std::io::Error::other(err.to_string())))
}

/// First free path in `dir` for `name`: the name itself, then `base_1.ext`,
/// `base_2.ext`, ...
pub fn next_free_path(dir: &Path, name: impl AsRef<OsStr>) -> PathBuf {
    let name = name.as_ref();
    let candidate = dir.join(name);
    if candidate.symlink_metadata().is_err() {
        return candidate;
    }

    let mut counter = 1;
    loop {
        let candidate = dir.join(suffixed_name(name, counter));
        if candidate.symlink_metadata().is_err() {
            return candidate;
        }
        counter += 1;
    }
}

/// Remove a directory that must already be empty.
///
/// Never force-deletes: leftover entries surface as `NonEmptyDirectory`.
pub fn remove_empty_dir(dir: &Path) -> OrganizerResult<()> {
    let has_entries = fs::read_dir(dir)
        .map_err(|e| OrganizerError::io(dir, e))?
        .next()
        .is_some();
    if has_entries {
        return Err(OrganizerError::NonEmptyDirectory(dir.to_path_buf()));
    }
    fs::remove_dir(dir).map_err(|e| OrganizerError::io(dir, e))
}
