//! Plain-text listing of the organized submission tree.

use crate::services::scanner::walker::{self, SubmissionFolder};
use crate::types::errors::{OrganizerError, OrganizerResult};
use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Render the report for every top-level folder of `target_dir`, in name order.
///
/// Nested entries are listed depth-first, directories before files, each
/// indented two spaces per level. Files carry their local modification time
/// when it can be read.
pub fn render_report(target_dir: &Path) -> OrganizerResult<String> {
    let mut out = String::new();
    for folder in walker::scan_submission_folders(target_dir)? {
        push_folder(&mut out, &folder)
            .map_err(|e| OrganizerError::io(&folder.path, io::Error::other(e)))?;
    }
    out.push_str("End of Report\n");
    Ok(out)
}

fn push_folder(out: &mut String, folder: &SubmissionFolder) -> fmt::Result {
    writeln!(out, "{}", folder.raw_name)?;

    let entries = WalkDir::new(&folder.path)
        .min_depth(1)
        .follow_links(false)
        .sort_by(|a, b| {
            b.file_type()
                .is_dir()
                .cmp(&a.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        });

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Report: skipping unreadable entry: {e}");
                continue;
            }
        };

        let indent = "  ".repeat(entry.depth());
        let name = entry.file_name().to_string_lossy();

        if entry.file_type().is_dir() {
            writeln!(out, "{indent}{name}/")?;
        } else if let Some(stamp) = modified_stamp(&entry) {
            writeln!(out, "{indent}{name} ({stamp})")?;
        } else {
            writeln!(out, "{indent}{name}")?;
        }
    }
    writeln!(out)
}

/// Write the report to `<target_dir>/<report_file_name>`, replacing any old one.
pub fn write_submission_report(
    target_dir: &Path,
    report_file_name: &str,
) -> OrganizerResult<PathBuf> {
    let report = render_report(target_dir)?;
    let report_path = target_dir.join(report_file_name);
    fs::write(&report_path, report).map_err(|e| OrganizerError::io(&report_path, e))?;

    log::info!("Submission report saved to: {}", report_path.display());
    Ok(report_path)
}

fn modified_stamp(entry: &walkdir::DirEntry) -> Option<String> {
    let modified = entry.metadata().ok()?.modified().ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.format("%Y-%m-%d %H:%M:%S").to_string())
}
