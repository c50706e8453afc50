use super::*;
use std::fs;
use tempfile::TempDir;

fn row(name: &str, id: &str, class_name: &str, team: &str) -> RosterRow {
    RosterRow {
        name: name.into(),
        student_id: id.into(),
        class_name: class_name.into(),
        team: team.into(),
    }
}

#[test]
fn test_build_finds_every_row() {
    let index = RosterIndex::build(vec![
        row("Jane Doe", "S1", "A", "T9"),
        row("Doe, John", "S2", "A", "T3"),
        row("  mary   ann  ", "S3", "B", "T1"),
    ]);

    assert_eq!(index.len(), 3);
    assert_eq!(index.find("Jane Doe").unwrap().identifier, "S1");
    assert_eq!(index.find("DOE JOHN").unwrap().identifier, "S2");
    assert_eq!(index.find("Mary Ann").unwrap().team, "T1");
    assert!(index.find("Nobody").is_none());
    assert!(index.duplicates().is_empty());
}

#[test]
fn test_lookup_is_case_comma_and_space_insensitive() {
    let index = RosterIndex::build(vec![row("Jane Doe", "S1", "A", "T9")]);
    assert!(index.find("JANE, DOE").is_some());
    assert!(index.find("  jane    doe ").is_some());
}

#[test]
fn test_duplicate_names_last_row_wins() {
    let index = RosterIndex::build(vec![
        row("Jane Doe", "S1", "A", "T9"),
        row("JANE, DOE", "S7", "B", "T2"),
    ]);

    assert_eq!(index.len(), 1);
    let record = index.find("jane doe").unwrap();
    assert_eq!(record.identifier, "S7");
    assert_eq!(record.team, "T2");
    assert_eq!(index.duplicates(), ["JANE DOE".to_string()]);
}

#[test]
fn test_find_by_identifier() {
    let index = RosterIndex::build(vec![row("Doe, Jane", "S1234567", "A", "T9")]);
    let record = index.find_by_identifier("S1234567").unwrap();
    assert_eq!(record.display_name, "Doe Jane");
    assert!(index.find_by_identifier("S0000000").is_none());
}

#[test]
fn test_read_roster_any_column_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("roster.csv");
    fs::write(
        &path,
        "team, student_id ,name,class\nT9,S1,\"Doe, Jane\",A\nT3,S2,John Roe,B\n",
    )
    .unwrap();

    let rows = read_roster(&path).unwrap();
    assert_eq!(
        rows,
        vec![row("Doe, Jane", "S1", "A", "T9"), row("John Roe", "S2", "B", "T3")]
    );
}

#[test]
fn test_read_roster_missing_column() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("roster.csv");
    fs::write(&path, "name,student_id,class\nJane,S1,A\n").unwrap();

    let err = read_roster(&path).unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn test_read_roster_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_roster(&temp_dir.path().join("absent.csv")).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
