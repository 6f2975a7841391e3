//! Hour-by-hour categorization of worked time.
//!
//! A shift is cut into slices that never cross a clock-hour boundary. Each
//! slice is classified from its start instant with [`is_night`] and
//! [`is_sunday`] and its length is added to the matching
//! [`HourBreakdown`] bucket.
//!
//! Both predicates only change value on a whole hour (21:00, 06:00 and
//! midnight), so classifying a slice by its start instant is exact. A bonus
//! window starting mid-hour would need a finer partition.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{HourBreakdown, HourCategory};

/// Clock hour at which the night window opens (inclusive).
pub const NIGHT_START_HOUR: u32 = 21;

/// Clock hour at which the night window closes (exclusive).
pub const NIGHT_END_HOUR: u32 = 6;

/// Returns true when `datetime` falls in the night window, 21:00 to 06:00.
///
/// # Example
///
/// ```
/// use shift_comparator::calculation::is_night;
/// use chrono::NaiveDateTime;
///
/// let late = NaiveDateTime::parse_from_str("2026-01-13 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let early = NaiveDateTime::parse_from_str("2026-01-13 05:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let morning = NaiveDateTime::parse_from_str("2026-01-13 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_night(late));
/// assert!(is_night(early));
/// assert!(!is_night(morning));
/// ```
pub fn is_night(datetime: NaiveDateTime) -> bool {
    let hour = datetime.hour();
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

/// Returns true when `datetime` falls on a Sunday.
///
/// # Example
///
/// ```
/// use shift_comparator::calculation::is_sunday;
/// use chrono::NaiveDateTime;
///
/// // 2026-01-18 is a Sunday
/// let sunday = NaiveDateTime::parse_from_str("2026-01-18 23:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let monday = NaiveDateTime::parse_from_str("2026-01-19 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_sunday(sunday));
/// assert!(!is_sunday(monday));
/// ```
pub fn is_sunday(datetime: NaiveDateTime) -> bool {
    datetime.weekday() == Weekday::Sun
}

/// A piece of worked time that stays within one clock hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSlice {
    /// The start of this slice.
    pub start_time: NaiveDateTime,
    /// The end of this slice.
    pub end_time: NaiveDateTime,
    /// The category this slice is paid under.
    pub category: HourCategory,
    /// Length of the slice in hours.
    pub hours: Decimal,
}

/// Cuts `[start, end)` at every clock-hour boundary.
///
/// The first slice runs from `start` to the next whole hour, the last one is
/// clipped at `end`. Returns an empty vector when `end` is not after `start`.
///
/// # Example
///
/// ```
/// use shift_comparator::calculation::slice_by_hour;
/// use shift_comparator::models::HourCategory;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-13 20:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-13 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let slices = slice_by_hour(start, end);
/// assert_eq!(slices.len(), 2);
/// assert_eq!(slices[0].category, HourCategory::Normal);
/// assert_eq!(slices[0].hours, Decimal::new(5, 1));
/// assert_eq!(slices[1].category, HourCategory::Night);
/// ```
pub fn slice_by_hour(start: NaiveDateTime, end: NaiveDateTime) -> Vec<HourSlice> {
    let mut slices = Vec::new();
    let mut current = start;

    while current < end {
        let slice_end = next_hour_boundary(current).min(end);
        slices.push(HourSlice {
            start_time: current,
            end_time: slice_end,
            category: HourCategory::classify(is_night(current), is_sunday(current)),
            hours: hours_between(current, slice_end),
        });
        current = slice_end;
    }

    slices
}

/// Buckets the time between `start` and `end` into an [`HourBreakdown`].
///
/// The four buckets of the result sum to the length of the interval.
///
/// # Example
///
/// ```
/// use shift_comparator::calculation::categorize_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// // Sunday 22:00 to Monday 07:00
/// let start = NaiveDateTime::parse_from_str("2026-01-18 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-19 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let breakdown = categorize_hours(start, end);
/// assert_eq!(breakdown.night_sunday, Decimal::from(2));
/// assert_eq!(breakdown.night, Decimal::from(6));
/// assert_eq!(breakdown.normal, Decimal::from(1));
/// ```
pub fn categorize_hours(start: NaiveDateTime, end: NaiveDateTime) -> HourBreakdown {
    let mut breakdown = HourBreakdown::default();
    for slice in slice_by_hour(start, end) {
        breakdown.add(slice.category, slice.hours);
    }
    breakdown
}

/// Returns the first whole clock hour strictly after `datetime`.
fn next_hour_boundary(datetime: NaiveDateTime) -> NaiveDateTime {
    let into_hour = Duration::seconds(i64::from(datetime.minute() * 60 + datetime.second()))
        + Duration::nanoseconds(i64::from(datetime.nanosecond()));
    datetime - into_hour + Duration::hours(1)
}

/// Length of `[start, end)` in hours, at nanosecond resolution.
fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let elapsed = end - start;
    // Slices are at most an hour long, far inside the i64 nanosecond range.
    let seconds = match elapsed.num_nanoseconds() {
        Some(nanos) => Decimal::new(nanos, 9),
        None => Decimal::new(elapsed.num_seconds(), 0),
    };
    seconds / Decimal::new(3600, 0)
}
