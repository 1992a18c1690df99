//! Date-range arithmetic for contract durations

use chrono::{Datelike, Days, NaiveDate};

/// Whole months from `start` to `end`, fractional part truncated.
///
/// A partial trailing month does not count: the month only completes
/// once the day-of-month of `start` is reached again, or `end` runs
/// out of days to reach it. A start anchored past the end of `end`'s
/// month clamps to its last day, so Jan 31 to Feb 29 is one whole
/// month. Returns 0 when `end` is not after `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() && !is_month_end(end) {
        months -= 1;
    }

    months.max(0) as u32
}

fn is_month_end(date: NaiveDate) -> bool {
    date.checked_add_days(Days::new(1))
        .map(|next| next.month() != date.month())
        .unwrap_or(true)
}
