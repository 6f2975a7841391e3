//! Calendar date parsing for user-supplied text.

use chrono::NaiveDate;

use crate::error::{ComparatorError, ComparatorResult};

/// Accepted date formats, tried in order.
pub const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parses `YYYY-MM-DD` or `DD/MM/YYYY` into a calendar date.
///
/// # Example
///
/// ```
/// use shift_comparator::dates::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// assert_eq!(parse_date("2026-01-13").unwrap(), expected);
/// assert_eq!(parse_date("13/01/2026").unwrap(), expected);
/// assert!(parse_date("01.13.2026").is_err());
/// ```
pub fn parse_date(input: &str) -> ComparatorResult<NaiveDate> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ComparatorError::InvalidDate {
            input: input.to_string(),
        })
}
