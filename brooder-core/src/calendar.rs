//! Calendar math for the fixed eight-week curriculum.
//!
//! Two "what day is it" conventions coexist, both inherited from how
//! clients talk to the API:
//!
//! - The default day (no date supplied) is the current calendar date in the
//!   reference timezone ([`today_in_reference`]).
//! - Explicitly supplied timestamps are truncated to their UTC calendar
//!   date ([`utc_day`]).
//!
//! Near midnight these two can name adjacent dates. Every `day_date` stored
//! in the ledger goes through exactly one of these functions so the
//! divergence is at least confined to this module.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::models::TaskFrequency;

/// All default-date operations compute "today" in this timezone.
pub const REFERENCE_TZ: Tz = chrono_tz::America::Los_Angeles;

/// Length of the curriculum; week numbers reported past this stay capped.
pub const CURRICULUM_WEEKS: i64 = 8;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// The current calendar date in the reference timezone.
pub fn today_in_reference() -> NaiveDate {
    reference_day(Utc::now())
}

/// Localize an instant to the reference timezone and take its calendar date.
pub fn reference_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&REFERENCE_TZ).date_naive()
}

/// Truncate an instant to its UTC calendar date. Used for explicitly
/// supplied `day_date` values.
pub fn utc_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Count of elapsed days since `start`, 1-based: the start day itself is
/// day 1. Zero or negative when `start` is in the future.
pub fn elapsed_days(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_seconds().div_euclid(SECS_PER_DAY) + 1
}

/// Curriculum week for a 1-based elapsed day count, capped at
/// [`CURRICULUM_WEEKS`]. Day counts ≤ 0 land in week 0.
pub fn week_of(elapsed_day: i64) -> i64 {
    ((elapsed_day - 1).div_euclid(7) + 1).min(CURRICULUM_WEEKS)
}

/// Whether a task is relevant on the flock's current elapsed day.
///
/// DAILY tasks apply every day of their week; everything else applies only
/// when pinned to exactly the current day. Unpinned ONCE/WEEKLY tasks
/// ("any day this week") are never gated by this predicate.
pub fn is_applicable_today(
    frequency: TaskFrequency,
    day_number: Option<i64>,
    current_day: i64,
) -> bool {
    frequency == TaskFrequency::Daily || day_number == Some(current_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn week_of_caps_at_eight() {
        assert_eq!(week_of(1), 1);
        assert_eq!(week_of(7), 1);
        assert_eq!(week_of(8), 2);
        assert_eq!(week_of(56), 8);
        for day in 57..200 {
            assert_eq!(week_of(day), 8);
        }
    }

    #[test]
    fn week_of_is_non_decreasing() {
        let mut prev = week_of(-10);
        for day in -9..120 {
            let week = week_of(day);
            assert!(week >= prev);
            assert!(week <= CURRICULUM_WEEKS);
            prev = week;
        }
    }

    #[test]
    fn week_of_day_zero_is_week_zero() {
        assert_eq!(week_of(0), 0);
        assert_eq!(week_of(-3), 0);
    }

    #[test]
    fn elapsed_days_counts_start_day_as_one() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(elapsed_days(start, start), 1);

        let later = start + chrono::Duration::hours(23);
        assert_eq!(elapsed_days(start, later), 1);

        let next = start + chrono::Duration::hours(25);
        assert_eq!(elapsed_days(start, next), 2);

        let week_later = start + chrono::Duration::days(7);
        assert_eq!(elapsed_days(start, week_later), 8);
        assert_eq!(week_of(elapsed_days(start, week_later)), 2);
    }

    #[test]
    fn elapsed_days_future_start_is_not_positive() {
        let start = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert!(elapsed_days(start, now) <= 0);
    }

    #[test]
    fn daily_tasks_apply_on_every_day() {
        for day in 1..=56 {
            assert!(is_applicable_today(TaskFrequency::Daily, None, day));
        }
    }

    #[test]
    fn pinned_once_task_applies_only_on_its_day() {
        for day in 1..=10 {
            let applicable = is_applicable_today(TaskFrequency::Once, Some(5), day);
            assert_eq!(applicable, day == 5);
        }
    }

    #[test]
    fn unpinned_once_task_is_never_applicable_today() {
        assert!(!is_applicable_today(TaskFrequency::Once, None, 3));
        assert!(!is_applicable_today(TaskFrequency::Weekly, None, 3));
    }

    #[test]
    fn reference_day_shifts_near_utc_midnight() {
        // 03:00 UTC is still the previous evening in Los Angeles.
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 3, 0, 0).unwrap();
        assert_eq!(
            utc_day(instant),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert_eq!(
            reference_day(instant),
            NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
        );
    }

    #[test]
    fn reference_day_matches_utc_day_midday() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 20, 0, 0).unwrap();
        assert_eq!(utc_day(instant), reference_day(instant));
    }
}
