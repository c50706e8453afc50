pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::scanner::organizer::{organize_submissions, OrganizeSummary};
pub use types::errors::{OrganizerError, OrganizerResult};
