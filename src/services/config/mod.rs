pub mod models;

pub use models::*;

use crate::types::errors::{OrganizerError, OrganizerResult};
use std::fs;
use std::path::Path;

pub struct ConfigService;

impl ConfigService {
    /// Load settings from an optional JSON file. Missing fields fall back to defaults.
    pub fn load(path: Option<&Path>) -> OrganizerResult<OrganizerSettings> {
        let Some(path) = path else {
            return Ok(OrganizerSettings::default());
        };

        if !path.is_file() {
            return Err(OrganizerError::Configuration(format!(
                "Settings file does not exist: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|e| OrganizerError::io(path, e))?;
        let settings: OrganizerSettings = serde_json::from_str(&raw).map_err(|e| {
            OrganizerError::Configuration(format!("Invalid settings file {}: {e}", path.display()))
        })?;

        Self::validate(&settings)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings that would make folder matching or file placement ambiguous.
    pub fn validate(settings: &OrganizerSettings) -> OrganizerResult<()> {
        if settings.pattern.separator.is_empty() || settings.pattern.terminator.is_empty() {
            return Err(OrganizerError::Configuration(
                "Folder pattern separator and terminator must not be empty".into(),
            ));
        }
        if settings.match_policy == MatchPolicy::IdentifierPrefix
            && settings.pattern.id_prefix_len == 0
        {
            return Err(OrganizerError::Configuration(
                "id_prefix_len must be at least 1".into(),
            ));
        }
        for name in [
            &settings.log_file_name,
            &settings.report_file_name,
            &settings.backup_dir_name,
        ] {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(OrganizerError::Configuration(format!(
                    "Invalid file name in settings: '{name}'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
