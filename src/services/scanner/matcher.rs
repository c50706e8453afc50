//! Submission folder name → roster record resolution.

use super::normalizer::clean_candidate;
use crate::services::config::{FolderPattern, MatchPolicy};
use crate::services::roster::{RosterIndex, RosterRecord};

/// Outcome of matching one folder name against the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'a> {
    Matched {
        /// Name part used in the canonical folder name.
        candidate: String,
        record: &'a RosterRecord,
    },
    /// Folder name does not follow the expected shape.
    NoCandidate,
    /// Candidate extracted but absent from the roster.
    NotInRoster { candidate: String },
}

/// Extract the student name from `<prefix> - <Name> SOI<suffix>`.
///
/// The terminator is searched only after the separator and is case-sensitive.
/// Returns `None` for malformed names, which are a normal occurrence.
pub fn match_name(folder_name: &str, pattern: &FolderPattern) -> Option<String> {
    let sep_idx = folder_name.find(&pattern.separator)?;
    let rest = &folder_name[sep_idx + pattern.separator.len()..];
    let end_idx = rest.find(&pattern.terminator)?;

    let candidate = clean_candidate(&rest[..end_idx]);
    if candidate.is_empty() {
        return None;
    }
    Some(candidate)
}

/// Resolve a folder against the roster using exactly one policy.
pub fn resolve<'a>(
    folder_name: &str,
    index: &'a RosterIndex,
    policy: MatchPolicy,
    pattern: &FolderPattern,
) -> MatchOutcome<'a> {
    match policy {
        MatchPolicy::DisplayName => {
            let Some(candidate) = match_name(folder_name, pattern) else {
                return MatchOutcome::NoCandidate;
            };
            match index.find(&candidate) {
                Some(record) => MatchOutcome::Matched { candidate, record },
                None => MatchOutcome::NotInRoster { candidate },
            }
        }
        MatchPolicy::IdentifierPrefix => {
            let prefix: String = folder_name.chars().take(pattern.id_prefix_len).collect();
            if prefix.chars().count() < pattern.id_prefix_len {
                return MatchOutcome::NoCandidate;
            }
            match index.find_by_identifier(&prefix) {
                Some(record) => MatchOutcome::Matched {
                    candidate: record.display_name.clone(),
                    record,
                },
                None => MatchOutcome::NotInRoster { candidate: prefix },
            }
        }
    }
}

/// `team_name_identifier`, with `/` dropped from the name part.
pub fn canonical_folder_name(candidate: &str, record: &RosterRecord) -> String {
    let sanitized = candidate.replace('/', "");
    format!("{}_{}_{}", record.team, sanitized, record.identifier)
}
