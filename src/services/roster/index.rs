use super::reader::RosterRow;
use crate::services::scanner::normalizer::{clean_candidate, normalize_name};
use std::collections::HashMap;

/// A roster entry, immutable once the index is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    pub identifier: String,
    pub class_name: String,
    pub team: String,
    /// Cleaned roster name (case kept). Used by the identifier-prefix policy.
    pub display_name: String,
}

/// Normalized-name lookup table. Last row wins on duplicate keys.
#[derive(Debug, Default)]
pub struct RosterIndex {
    by_name: HashMap<String, RosterRecord>,
    by_identifier: HashMap<String, RosterRecord>,
    duplicates: Vec<String>,
}

impl RosterIndex {
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RosterRow>,
    {
        let mut index = RosterIndex::default();

        for row in rows {
            let key = normalize_name(&row.name);
            let record = RosterRecord {
                identifier: row.student_id,
                class_name: row.class_name,
                team: row.team,
                display_name: clean_candidate(&row.name),
            };

            index
                .by_identifier
                .insert(record.identifier.clone(), record.clone());

            if let Some(previous) = index.by_name.insert(key.clone(), record) {
                log::warn!(
                    "Duplicate roster name '{key}': '{}' replaced by a later row",
                    previous.identifier
                );
                index.duplicates.push(key);
            }
        }

        index
    }

    /// Look up a record by name. The key is normalized here, so raw text is fine.
    pub fn find(&self, name: &str) -> Option<&RosterRecord> {
        self.by_name.get(&normalize_name(name))
    }

    pub fn find_by_identifier(&self, identifier: &str) -> Option<&RosterRecord> {
        self.by_identifier.get(identifier)
    }

    /// Keys that were overwritten while building, in the order it happened.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
