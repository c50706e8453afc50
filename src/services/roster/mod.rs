//! Class roster: CSV reader and the name/identifier lookup index.

mod index;
mod reader;

pub use index::{RosterIndex, RosterRecord};
pub use reader::{read_roster, RosterRow};

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod tests;
