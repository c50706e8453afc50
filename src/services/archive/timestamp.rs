use chrono::{Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use filetime::FileTime;

/// DOS date-time fields store seconds halved, so stored times are always even
/// and may trail the real modification time by up to this much.
pub const DOS_TIME_RESOLUTION_SECS: i64 = 2;

/// Convert a zip entry's DOS date-time to a platform file time.
///
/// The fields are wall-clock values in the local zone. Ambiguous local times
/// (DST fall-back) take the earlier instant; nonexistent ones (DST gap) are
/// pushed forward one hour, as `mktime` does. Returns `None` for field values
/// that do not form a calendar date.
pub fn dos_to_file_time(stamp: zip::DateTime) -> Option<FileTime> {
    let naive = dos_to_naive(stamp)?;

    let local = match Local.from_local_datetime(&naive) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => Local
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()?,
    };

    Some(FileTime::from_unix_time(local.timestamp(), 0))
}

fn dos_to_naive(stamp: zip::DateTime) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(
        i32::from(stamp.year()),
        u32::from(stamp.month()),
        u32::from(stamp.day()),
    )?
    .and_hms_opt(
        u32::from(stamp.hour()),
        u32::from(stamp.minute()),
        u32::from(stamp.second()),
    )
}
