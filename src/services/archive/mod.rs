//! Archive handling for submission trees: in-place recursive expansion
//! and the optional pre-run backup.

mod backup;
mod extract;
mod timestamp;
mod types;

// Re-export public API
pub use backup::{backup_archives, BackupResult};
pub use extract::{expand_all, expand_archive};
pub use timestamp::{dos_to_file_time, DOS_TIME_RESOLUTION_SECS};
pub use types::{ArchiveFormat, ExpansionReport, FailedArchive};

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
