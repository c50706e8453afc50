//! Command surface: flags, interactive prompts for anything missing, and
//! input validation before the organizer runs.

use crate::services::config::{ConfigService, MatchPolicy, OrganizerSettings};
use crate::services::scanner::organizer::{self, OrganizeSummary};
use crate::types::errors::{OrganizerError, OrganizerResult};
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    DisplayName,
    IdentifierPrefix,
}

impl From<PolicyArg> for MatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::DisplayName => MatchPolicy::DisplayName,
            PolicyArg::IdentifierPrefix => MatchPolicy::IdentifierPrefix,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "submission-organizer",
    version,
    about = "Expand, match, rename and merge student submission folders"
)]
pub struct Cli {
    /// Directory containing the submission folders (prompted if omitted)
    #[arg(long, env = "SUBMISSION_TARGET")]
    pub target: Option<PathBuf>,

    /// Roster CSV with name, student_id, class, team columns (prompted if omitted)
    #[arg(long, env = "SUBMISSION_ROSTER")]
    pub roster: Option<PathBuf>,

    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Copy every archive to a backup folder next to the target first
    #[arg(long)]
    pub backup: bool,

    /// Skip writing the submission report
    #[arg(long)]
    pub no_report: bool,

    /// How folders are matched to roster records
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
}

/// Validated inputs for one run.
#[derive(Debug)]
pub struct OrganizeRequest {
    pub target: PathBuf,
    pub roster: PathBuf,
    pub settings: OrganizerSettings,
}

pub const TARGET_PROMPT: &str = "Enter Full Path of the Directory containing students submission: ";
pub const ROSTER_PROMPT: &str =
    "Enter Full Path + CSV Filename that has (student_id + name + class + team): ";

/// Ask one question and return the trimmed answer as a path.
pub fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> OrganizerResult<PathBuf> {
    let io_err =
        |e: std::io::Error| OrganizerError::Configuration(format!("Failed to read input: {e}"));

    write!(output, "{question}").map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(io_err)?;

    let answer = line.trim();
    if answer.is_empty() {
        return Err(OrganizerError::Configuration("No path entered".into()));
    }
    Ok(PathBuf::from(answer))
}

/// Merge flags, prompts and the settings file into a validated request.
///
/// The target is validated before the roster is asked for.
pub fn resolve_request<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> OrganizerResult<OrganizeRequest> {
    let mut settings = ConfigService::load(cli.config.as_deref())?;
    if cli.backup {
        settings.backup_archives = true;
    }
    if cli.no_report {
        settings.write_report = false;
    }
    if let Some(policy) = cli.policy {
        settings.match_policy = policy.into();
    }
    ConfigService::validate(&settings)?;

    let target = match &cli.target {
        Some(p) => p.clone(),
        None => prompt_path(input, output, TARGET_PROMPT)?,
    };
    if !target.is_dir() {
        return Err(OrganizerError::Configuration(format!(
            "The specified directory does not exist: {}. Please check the path and try again.",
            target.display()
        )));
    }

    let roster = match &cli.roster {
        Some(p) => p.clone(),
        None => prompt_path(input, output, ROSTER_PROMPT)?,
    };
    if !roster.is_file() {
        return Err(OrganizerError::Configuration(format!(
            "The specified CSV file does not exist: {}. Please check the path and try again.",
            roster.display()
        )));
    }

    Ok(OrganizeRequest {
        target,
        roster,
        settings,
    })
}

pub fn run_organize(request: &OrganizeRequest) -> OrganizerResult<OrganizeSummary> {
    log::info!(
        "Organizing {} with roster {}",
        request.target.display(),
        request.roster.display()
    );
    organizer::organize_submissions(&request.target, &request.roster, &request.settings)
}

/// Human-readable end-of-run summary.
pub fn format_summary(summary: &OrganizeSummary) -> String {
    let mut lines = vec![format!(
        "Folders: {} renamed, {} merged, {} skipped, {} failed",
        summary.renamed, summary.merged, summary.skipped, summary.failed
    )];

    lines.push(format!(
        "Archives: {} expanded ({} files), {} failed",
        summary.expansion.expanded.len(),
        summary.expansion.files_extracted,
        summary.expansion.failed.len()
    ));
    for failed in &summary.expansion.failed {
        lines.push(format!("  Failed to unzip {}", failed.path.display()));
    }

    if let Some(backup) = &summary.backup {
        lines.push(format!(
            "Backups: {} archives copied to {}",
            backup.copied.len(),
            backup.backup_dir.display()
        ));
    }

    lines.push(format!("Merge log saved to: {}", summary.log_path.display()));
    if let Some(report) = &summary.report_path {
        lines.push(format!("Submission report saved to: {}", report.display()));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "tests/organize_cmds_tests.rs"]
mod tests;
