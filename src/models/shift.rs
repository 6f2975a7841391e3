//! Shift kinds and resolved work shifts.
//!
//! This module defines the fixed [`ShiftKind`] table and the [`WorkShift`]
//! value that pins a kind to a calendar date as absolute start and end
//! instants.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ComparatorError, ComparatorResult};

/// One of the three fixed daily work patterns.
///
/// # Example
///
/// ```
/// use shift_comparator::models::ShiftKind;
///
/// let kind: ShiftKind = "night".parse().unwrap();
/// assert_eq!(kind, ShiftKind::Night);
/// assert_eq!(kind.definition().start_hour, 22);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// 06:00 to 15:00.
    #[serde(alias = "MORNING", alias = "MATIN")]
    Morning,
    /// 14:00 to 23:00.
    #[serde(alias = "AFTERNOON", alias = "APRES_MIDI")]
    Afternoon,
    /// 22:00 to 07:00 on the following day.
    #[serde(alias = "NIGHT", alias = "NUIT")]
    Night,
}

/// Clock hours at which a shift kind starts and ends.
///
/// An `end_hour` that is not after `start_hour` means the shift ends on the
/// calendar day after it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftDefinition {
    /// Clock hour the shift starts at.
    pub start_hour: u32,
    /// Clock hour the shift ends at.
    pub end_hour: u32,
}

impl ShiftDefinition {
    /// Returns true when the shift ends on the day after it starts.
    pub fn wraps_midnight(&self) -> bool {
        self.end_hour <= self.start_hour
    }
}

impl ShiftKind {
    /// All shift kinds, in display order.
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Night];

    /// Returns the clock start/end table entry for this kind.
    pub const fn definition(self) -> ShiftDefinition {
        match self {
            ShiftKind::Morning => ShiftDefinition {
                start_hour: 6,
                end_hour: 15,
            },
            ShiftKind::Afternoon => ShiftDefinition {
                start_hour: 14,
                end_hour: 23,
            },
            ShiftKind::Night => ShiftDefinition {
                start_hour: 22,
                end_hour: 7,
            },
        }
    }

    /// Returns the lowercase token used in requests and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Afternoon => "afternoon",
            ShiftKind::Night => "night",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftKind {
    type Err = ComparatorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "morning" | "matin" => Ok(ShiftKind::Morning),
            "afternoon" | "apres_midi" => Ok(ShiftKind::Afternoon),
            "night" | "nuit" => Ok(ShiftKind::Night),
            _ => Err(ComparatorError::UnknownShiftKind {
                token: token.to_string(),
            }),
        }
    }
}

/// A shift kind resolved onto a calendar date.
///
/// The start and end instants are derived once at construction and never
/// change.
///
/// # Example
///
/// ```
/// use shift_comparator::models::{ShiftKind, WorkShift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 2026-01-13 is a Tuesday
/// let shift = WorkShift::new(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(), ShiftKind::Night);
/// assert_eq!(shift.end().date(), NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// assert_eq!(shift.duration_hours(), Decimal::from(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkShift {
    date: NaiveDate,
    kind: ShiftKind,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl WorkShift {
    /// Resolves `kind` on `date` into absolute start and end instants.
    ///
    /// # Panics
    ///
    /// Panics if the shift would end after [`NaiveDateTime::MAX`]. Use
    /// [`WorkShift::try_new`] for dates that come from user input.
    pub fn new(date: NaiveDate, kind: ShiftKind) -> Self {
        let definition = kind.definition();
        let midnight = date.and_time(NaiveTime::MIN);
        let start = midnight + Duration::hours(i64::from(definition.start_hour));
        let mut end = midnight + Duration::hours(i64::from(definition.end_hour));
        if definition.wraps_midnight() {
            end += Duration::days(1);
        }

        Self {
            date,
            kind,
            start,
            end,
        }
    }

    /// Like [`WorkShift::new`], but rejects dates whose shift would end
    /// past the last representable instant.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_comparator::models::{ShiftKind, WorkShift};
    /// use chrono::NaiveDate;
    ///
    /// assert!(WorkShift::try_new(NaiveDate::MAX, ShiftKind::Morning).is_ok());
    /// assert!(WorkShift::try_new(NaiveDate::MAX, ShiftKind::Night).is_err());
    /// ```
    pub fn try_new(date: NaiveDate, kind: ShiftKind) -> ComparatorResult<Self> {
        let definition = kind.definition();
        let midnight = date.and_time(NaiveTime::MIN);
        let end_offset = if definition.wraps_midnight() {
            Duration::days(1) + Duration::hours(i64::from(definition.end_hour))
        } else {
            Duration::hours(i64::from(definition.end_hour))
        };

        let start = midnight.checked_add_signed(Duration::hours(i64::from(definition.start_hour)));
        let end = midnight.checked_add_signed(end_offset);
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                date,
                kind,
                start,
                end,
            }),
            _ => Err(ComparatorError::DateOutOfRange { date }),
        }
    }

    /// The calendar date the shift starts on.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The shift kind.
    pub fn kind(&self) -> ShiftKind {
        self.kind
    }

    /// The absolute start instant.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The absolute end instant.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Total length of the shift in hours.
    pub fn duration_hours(&self) -> Decimal {
        Decimal::new((self.end - self.start).num_seconds(), 0) / Decimal::new(3600, 0)
    }
}
