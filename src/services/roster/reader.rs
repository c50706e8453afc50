use crate::types::errors::{OrganizerError, OrganizerResult};
use serde::Deserialize;
use std::path::Path;

/// One raw roster row. Column names are fixed, column order is not.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RosterRow {
    pub name: String,
    pub student_id: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub team: String,
}

/// Read every row of a roster CSV, in file order.
pub fn read_roster(csv_path: &Path) -> OrganizerResult<Vec<RosterRow>> {
    if !csv_path.is_file() {
        return Err(OrganizerError::Configuration(format!(
            "Roster file does not exist: {}",
            csv_path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(csv_path)?;

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<RosterRow>().enumerate() {
        let row = result.map_err(|e| {
            // +2: header line, 1-based
            OrganizerError::Roster(format!("{} (row {}): {e}", csv_path.display(), line + 2))
        })?;
        rows.push(row);
    }

    log::info!("Read {} roster rows from {}", rows.len(), csv_path.display());
    Ok(rows)
}
