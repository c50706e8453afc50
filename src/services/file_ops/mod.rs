pub mod action_log;
pub mod merge;
pub mod report;

pub use action_log::{ActionLog, MergeAction};
pub use merge::merge_into;
pub use report::{render_report, write_submission_report};

#[cfg(test)]
#[path = "tests/merge_tests.rs"]
mod merge_tests;

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod report_tests;
