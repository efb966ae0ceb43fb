use chrono::NaiveDate;

/// Sorts dates newest first and drops duplicates without touching the input.
fn distinct_descending(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();
    sorted
}

/// Current run of consecutive active days ending today or yesterday.
///
/// `activity_dates` are the days with at least one logged activity, normally
/// the most recent distinct dates in descending order. Dates after `today`
/// are ignored. A most recent activity older than yesterday means the streak
/// is broken and the result is 0.
pub fn calculate_current_streak(activity_dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let dates: Vec<NaiveDate> = distinct_descending(activity_dates)
        .into_iter()
        .filter(|d| *d <= today)
        .collect();

    let Some(most_recent) = dates.first() else {
        return 0;
    };
    if (today - *most_recent).num_days() >= 2 {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() != 1 {
            break;
        }
        streak += 1;
    }
    streak
}

/// Longest run of consecutive days found anywhere in `activity_dates`.
pub fn calculate_longest_streak(activity_dates: &[NaiveDate]) -> u32 {
    let dates = distinct_descending(activity_dates);
    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    #[test]
    fn test_three_consecutive_days_ending_today() {
        let dates = vec![today(), days_ago(1), days_ago(2)];
        assert_eq!(calculate_current_streak(&dates, today()), 3);
    }

    #[test]
    fn test_streak_may_end_yesterday() {
        let dates = vec![days_ago(1), days_ago(2)];
        assert_eq!(calculate_current_streak(&dates, today()), 2);
    }

    #[test]
    fn test_gap_before_today_breaks_streak() {
        assert_eq!(calculate_current_streak(&[days_ago(3)], today()), 0);
        assert_eq!(calculate_current_streak(&[days_ago(2), days_ago(3)], today()), 0);
    }

    #[test]
    fn test_empty_dates_have_no_streak() {
        assert_eq!(calculate_current_streak(&[], today()), 0);
    }

    #[test]
    fn test_streak_stops_at_first_gap() {
        let dates = vec![today(), days_ago(1), days_ago(3), days_ago(4), days_ago(5)];
        assert_eq!(calculate_current_streak(&dates, today()), 2);
    }

    #[test]
    fn test_unsorted_and_duplicate_dates_are_normalised() {
        let dates = vec![days_ago(2), today(), days_ago(1), today()];
        assert_eq!(calculate_current_streak(&dates, today()), 3);
        // input untouched
        assert_eq!(dates[0], days_ago(2));
    }

    #[test]
    fn test_future_dates_are_ignored() {
        let dates = vec![today() + Duration::days(1), today()];
        assert_eq!(calculate_current_streak(&dates, today()), 1);
    }

    #[test]
    fn test_longest_streak_spans_gaps() {
        let dates = vec![today(), days_ago(3), days_ago(4), days_ago(5), days_ago(9)];
        assert_eq!(calculate_longest_streak(&dates), 3);
        assert_eq!(calculate_longest_streak(&[]), 0);
        assert_eq!(calculate_longest_streak(&[days_ago(9)]), 1);
    }
}
