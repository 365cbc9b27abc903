//! Snapshot naming scheme
//!
//! Managed snapshots are named `<source>_backup_<YYYY>.<MM>.<DD>`. The name is
//! the only place the creation date is recorded, so parsing it back is how a
//! rotation run learns the age of each snapshot.

use chrono::{Datelike, NaiveDate};

/// Separator between the source volume name and the date stamp
pub const BACKUP_INFIX: &str = "_backup_";

/// Largest year the four digit stamp can express
const MAX_YEAR: u32 = 9999;

/// Build the snapshot name for `source` taken on `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use lvm_auto_snapshot::domain::value_objects::snapshot_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(snapshot_name("data", date), "data_backup_2024.01.05");
/// ```
pub fn snapshot_name(source: &str, date: NaiveDate) -> String {
    format!(
        "{}{}{:04}.{:02}.{:02}",
        source,
        BACKUP_INFIX,
        date.year(),
        date.month(),
        date.day()
    )
}

/// Recover the snapshot date from `candidate`, if it is a managed snapshot of
/// `source`.
///
/// The match is anchored at the start only: anything after the third digit
/// group is ignored, so `data_backup_2024.01.05.old` still parses. Digit
/// groups may have any length. Names whose digits do not form a real calendar
/// date return `None`, same as names that don't match at all.
pub fn parse_snapshot_name(candidate: &str, source: &str) -> Option<NaiveDate> {
    let stamp = candidate
        .strip_prefix(source)?
        .strip_prefix(BACKUP_INFIX)?;

    let (year, rest) = take_number(stamp)?;
    let (month, rest) = take_number(rest.strip_prefix('.')?)?;
    let (day, _) = take_number(rest.strip_prefix('.')?)?;

    if year == 0 || year > MAX_YEAR {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Split a leading run of ASCII digits off `input` and parse it.
///
/// Returns `None` for an empty run or one too large for `u32`.
fn take_number(input: &str) -> Option<(u32, &str)> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let (digits, rest) = input.split_at(end);
    digits.parse().ok().map(|n| (n, rest))
}
