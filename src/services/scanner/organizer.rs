use super::matcher::{self, MatchOutcome};
use super::walker::{self, SubmissionFolder};
use crate::services::archive::{self, BackupResult, ExpansionReport};
use crate::services::config::{ConfigService, OrganizerSettings};
use crate::services::file_ops::{merge_into, write_submission_report, ActionLog, MergeAction};
use crate::services::fs_utils::file_utils::move_path;
use crate::services::roster::{read_roster, RosterIndex};
use crate::types::errors::{OrganizerError, OrganizerResult};
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to one top-level folder.
#[derive(Debug, Clone, PartialEq)]
pub enum FolderOutcome {
    Renamed(PathBuf),
    /// Folded into an existing canonical folder and removed.
    Merged(PathBuf),
    Skipped,
}

/// Result of a full organize run.
#[derive(Debug)]
pub struct OrganizeSummary {
    pub renamed: usize,
    pub merged: usize,
    pub skipped: usize,
    pub failed: usize,
    pub backup: Option<BackupResult>,
    pub expansion: ExpansionReport,
    pub log_path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub actions: Vec<MergeAction>,
}

/// Organize every submission folder under `target_dir`.
///
/// 1. Validates inputs and reads the roster (nothing is touched if this fails).
/// 2. Optionally backs up archives next to the target directory.
/// 3. Expands all archives, nested ones included.
/// 4. Renames each matched folder to `team_name_id`, merging into an existing
///    folder of that name. Unmatched folders are logged and left alone.
/// 5. Writes the report.
///
/// A failing folder is logged and the run continues with the next one.
pub fn organize_submissions(
    target_dir: &Path,
    roster_path: &Path,
    settings: &OrganizerSettings,
) -> OrganizerResult<OrganizeSummary> {
    if !target_dir.is_dir() {
        return Err(OrganizerError::Configuration(format!(
            "The specified directory does not exist: {}",
            target_dir.display()
        )));
    }
    if !roster_path.is_file() {
        return Err(OrganizerError::Configuration(format!(
            "The specified roster file does not exist: {}",
            roster_path.display()
        )));
    }
    ConfigService::validate(settings)?;

    let index = RosterIndex::build(read_roster(roster_path)?);
    if index.is_empty() {
        log::warn!("Roster {} has no entries", roster_path.display());
    }

    let backup = if settings.backup_archives {
        Some(archive::backup_archives(
            target_dir,
            &settings.backup_dir_name,
        )?)
    } else {
        None
    };

    let expansion = archive::expand_all(target_dir)?;

    let log_path = target_dir.join(&settings.log_file_name);
    let mut log = ActionLog::create(&log_path)?;

    let mut summary = OrganizeSummary {
        renamed: 0,
        merged: 0,
        skipped: 0,
        failed: 0,
        backup,
        expansion,
        log_path,
        report_path: None,
        actions: Vec::new(),
    };

    for folder in walker::scan_submission_folders(target_dir)? {
        match organize_folder(&folder, target_dir, &index, settings, &mut log) {
            Ok(FolderOutcome::Renamed(_)) => summary.renamed += 1,
            Ok(FolderOutcome::Merged(_)) => summary.merged += 1,
            Ok(FolderOutcome::Skipped) => summary.skipped += 1,
            Err(e) => {
                log::error!("Failed to organize '{}': {e}", folder.raw_name);
                summary.failed += 1;
                let failure = MergeAction::Failed {
                    folder: folder.raw_name.clone(),
                    error: e.to_string(),
                };
                if let Err(log_err) = log.record(failure) {
                    log::error!("Could not write to merge log: {log_err}");
                }
            }
        }
    }

    summary.actions = log.finish()?;
    log::info!("Merge log saved to: {}", summary.log_path.display());

    if settings.write_report {
        match write_submission_report(target_dir, &settings.report_file_name) {
            Ok(path) => summary.report_path = Some(path),
            Err(e) => log::warn!("Submission report not written: {e}"),
        }
    }

    Ok(summary)
}

/// Match one folder and rename or merge it.
pub fn organize_folder(
    folder: &SubmissionFolder,
    target_dir: &Path,
    index: &RosterIndex,
    settings: &OrganizerSettings,
    log: &mut ActionLog,
) -> OrganizerResult<FolderOutcome> {
    let outcome = matcher::resolve(
        &folder.raw_name,
        index,
        settings.match_policy,
        &settings.pattern,
    );

    let (candidate, record) = match outcome {
        MatchOutcome::Matched { candidate, record } => (candidate, record),
        MatchOutcome::NoCandidate => {
            log::info!("[SKIPPED] '{}' does not follow the folder pattern", folder.raw_name);
            log.record(MergeAction::Skipped {
                folder: folder.raw_name.clone(),
                reason: "Folder name does not follow the expected pattern".into(),
            })?;
            return Ok(FolderOutcome::Skipped);
        }
        MatchOutcome::NotInRoster { candidate } => {
            log::info!("[SKIPPED] Name '{candidate}' not found in roster.");
            log.record(MergeAction::Skipped {
                folder: folder.raw_name.clone(),
                reason: format!("No match for extracted name '{candidate}'"),
            })?;
            return Ok(FolderOutcome::Skipped);
        }
    };

    let new_name = matcher::canonical_folder_name(&candidate, record);
    if new_name == folder.raw_name {
        log.record(MergeAction::Skipped {
            folder: folder.raw_name.clone(),
            reason: "Already organized".into(),
        })?;
        return Ok(FolderOutcome::Skipped);
    }

    if let Some(existing) = find_existing_folder(target_dir, &new_name, &folder.raw_name)? {
        let existing_name = existing
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| new_name.clone());

        log.record(MergeAction::MergeGroup {
            folder: folder.raw_name.clone(),
            existing: existing_name,
        })?;
        merge_into(&folder.path, &existing, log)?;
        log::info!("Merged and removed folder '{}'", folder.raw_name);
        return Ok(FolderOutcome::Merged(existing));
    }

    let new_path = target_dir.join(&new_name);
    log.record(MergeAction::Renamed {
        folder: folder.raw_name.clone(),
        new_name: new_name.clone(),
    })?;
    move_path(&folder.path, &new_path)?;
    log::info!("Renamed '{}' to '{new_name}'", folder.raw_name);
    Ok(FolderOutcome::Renamed(new_path))
}

/// Find a directory in `target_dir` named `wanted`, ignoring letter case.
/// An exact-case match wins. The folder being organized (`own_name`) never counts.
fn find_existing_folder(
    target_dir: &Path,
    wanted: &str,
    own_name: &str,
) -> OrganizerResult<Option<PathBuf>> {
    let wanted_lower = wanted.to_lowercase();
    let mut case_insensitive = None;

    let entries = fs::read_dir(target_dir).map_err(|e| OrganizerError::io(target_dir, e))?;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if name == own_name || !entry.path().is_dir() {
            continue;
        }
        if name == wanted {
            return Ok(Some(entry.path()));
        }
        if case_insensitive.is_none() && name.to_lowercase() == wanted_lower {
            case_insensitive = Some(entry.path());
        }
    }

    Ok(case_insensitive)
}

#[cfg(test)]
#[path = "organizer_tests.rs"]
mod organizer_tests;
