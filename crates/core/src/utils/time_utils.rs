use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Converts a UTC instant to the calendar date a user sees in `tz`.
///
/// Streaks and dashboard windows are counted in calendar days, so "today"
/// must be resolved in the user's timezone rather than in UTC.
pub fn tracker_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's calendar date in `tz`.
pub fn tracker_today(tz: Tz) -> NaiveDate {
    tracker_date_from_utc(Utc::now(), tz)
}

/// Whole days from `start` to `end` (negative when `end` is earlier).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// First day of a window of `days` days that ends on (and includes) `end`.
pub fn window_start_for(end: NaiveDate, days: u32) -> NaiveDate {
    end - Duration::days(i64::from(days.saturating_sub(1)))
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}
