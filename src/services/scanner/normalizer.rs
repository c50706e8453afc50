//! Text normalization for roster names and submission folder names.
//! Roster keys and folder candidates must both pass through [`normalize_name`].

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for collapsing whitespace runs.
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Trim, drop commas and collapse whitespace runs to a single space.
/// Letter case is preserved.
///
/// `"  Doe,   Jane "` → `"Doe Jane"`
pub fn clean_candidate(text: &str) -> String {
    let without_commas = text.trim().replace(',', "");
    RE_WHITESPACE
        .replace_all(without_commas.trim(), " ")
        .into_owned()
}

/// Build the lookup key for a free-text name.
///
/// Pipeline:
/// 1. Trim surrounding whitespace
/// 2. Upper-case
/// 3. Remove commas
/// 4. Collapse interior whitespace runs to single spaces
///
/// Idempotent: `normalize_name(&normalize_name(x)) == normalize_name(x)`.
pub fn normalize_name(text: &str) -> String {
    clean_candidate(&text.to_uppercase())
}
