use super::*;
use crate::services::config::MatchPolicy;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn cli(target: Option<PathBuf>, roster: Option<PathBuf>) -> Cli {
    Cli {
        target,
        roster,
        config: None,
        backup: false,
        no_report: false,
        policy: None,
    }
}

fn inputs() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("subs");
    fs::create_dir(&target).unwrap();
    let roster = temp_dir.path().join("roster.csv");
    fs::write(&roster, "name,student_id,class,team\n").unwrap();
    (temp_dir, target, roster)
}

#[test]
fn test_prompt_path_trims_answer() {
    let mut input = Cursor::new("  /data/subs  \n");
    let mut output = Vec::new();

    let path = prompt_path(&mut input, &mut output, "Where? ").unwrap();

    assert_eq!(path, PathBuf::from("/data/subs"));
    assert_eq!(String::from_utf8(output).unwrap(), "Where? ");
}

#[test]
fn test_prompt_path_empty_answer() {
    let mut input = Cursor::new("\n");
    let err = prompt_path(&mut input, &mut Vec::new(), "Where? ").unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn test_resolve_request_prompts_for_missing_paths() {
    let (_temp, target, roster) = inputs();
    let answers = format!("{}\n{}\n", target.display(), roster.display());
    let mut input = Cursor::new(answers);
    let mut output = Vec::new();

    let request = resolve_request(&cli(None, None), &mut input, &mut output).unwrap();

    assert_eq!(request.target, target);
    assert_eq!(request.roster, roster);
    let shown = String::from_utf8(output).unwrap();
    assert!(shown.contains(TARGET_PROMPT));
    assert!(shown.contains(ROSTER_PROMPT));
}

#[test]
fn test_resolve_request_stops_before_roster_prompt_on_bad_target() {
    let (temp, _target, _roster) = inputs();
    let missing = temp.path().join("missing");
    let mut input = Cursor::new("");
    let mut output = Vec::new();

    let err = resolve_request(&cli(Some(missing), None), &mut input, &mut output).unwrap_err();

    assert!(err.to_string().contains("does not exist"));
    assert!(!String::from_utf8(output).unwrap().contains(ROSTER_PROMPT));
}

#[test]
fn test_resolve_request_rejects_directory_as_roster() {
    let (_temp, target, _roster) = inputs();
    let err = resolve_request(
        &cli(Some(target.clone()), Some(target)),
        &mut Cursor::new(""),
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("CSV file does not exist"));
}

#[test]
fn test_resolve_request_flag_overrides() {
    let (_temp, target, roster) = inputs();
    let mut args = cli(Some(target), Some(roster));
    args.backup = true;
    args.no_report = true;
    args.policy = Some(PolicyArg::IdentifierPrefix);

    let request = resolve_request(&args, &mut Cursor::new(""), &mut Vec::new()).unwrap();

    assert!(request.settings.backup_archives);
    assert!(!request.settings.write_report);
    assert_eq!(request.settings.match_policy, MatchPolicy::IdentifierPrefix);
}

#[test]
fn test_cli_parses_flags() {
    let args = Cli::parse_from([
        "submission-organizer",
        "--target",
        "/a",
        "--roster",
        "/b.csv",
        "--policy",
        "identifier-prefix",
        "--backup",
    ]);
    assert_eq!(args.target, Some(PathBuf::from("/a")));
    assert_eq!(args.policy, Some(PolicyArg::IdentifierPrefix));
    assert!(args.backup);
    assert!(!args.no_report);
}

#[test]
fn test_run_organize_and_summary() {
    let (_temp, target, roster) = inputs();
    fs::write(&roster, "name,student_id,class,team\nJane Doe,S1,A,T9\n").unwrap();
    fs::create_dir(target.join("001 - Jane Doe SOIx")).unwrap();

    let request = resolve_request(
        &cli(Some(target.clone()), Some(roster)),
        &mut Cursor::new(""),
        &mut Vec::new(),
    )
    .unwrap();
    let summary = run_organize(&request).unwrap();
    let text = format_summary(&summary);

    assert!(target.join("T9_Jane Doe_S1").is_dir());
    assert!(text.contains("Folders: 1 renamed, 0 merged, 0 skipped, 0 failed"));
    assert!(text.contains("Merge log saved to:"));
    assert!(text.contains("Submission report saved to:"));
}
