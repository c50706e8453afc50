use serde::{Deserialize, Serialize};

/// How a submission folder is tied to a roster record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// `<prefix> - <Name> SOI<suffix>`, looked up by normalized display name.
    #[default]
    DisplayName,
    /// First `id_prefix_len` characters of the folder name, looked up by identifier.
    IdentifierPrefix,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FolderPattern {
    pub separator: String,
    pub terminator: String,
    pub id_prefix_len: usize,
}

impl Default for FolderPattern {
    fn default() -> Self {
        Self {
            separator: " - ".into(),
            terminator: " SOI".into(), // Case-sensitive
            id_prefix_len: 8,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OrganizerSettings {
    pub log_file_name: String,
    pub report_file_name: String,
    pub backup_dir_name: String,
    pub backup_archives: bool,
    pub write_report: bool,
    pub match_policy: MatchPolicy,
    pub pattern: FolderPattern,
}

impl Default for OrganizerSettings {
    fn default() -> Self {
        Self {
            log_file_name: "merge_log.txt".into(),
            report_file_name: "submission_report.txt".into(),
            backup_dir_name: "__backup_zips".into(),
            backup_archives: false,
            write_report: true,
            match_policy: MatchPolicy::default(),
            pattern: FolderPattern::default(),
        }
    }
}
