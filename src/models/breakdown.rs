//! Hour categories and per-category hour totals.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pay category a span of worked time falls into.
///
/// # Example
///
/// ```
/// use shift_comparator::models::HourCategory;
///
/// assert_eq!(HourCategory::classify(true, true), HourCategory::NightSunday);
/// assert_eq!(HourCategory::classify(false, false), HourCategory::Normal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourCategory {
    /// Neither night nor Sunday.
    Normal,
    /// Night window on a day other than Sunday.
    Night,
    /// Sunday outside the night window.
    Sunday,
    /// Night window on a Sunday.
    NightSunday,
}

impl HourCategory {
    /// All categories, in report order.
    pub const ALL: [HourCategory; 4] = [
        HourCategory::Normal,
        HourCategory::Night,
        HourCategory::Sunday,
        HourCategory::NightSunday,
    ];

    /// Picks the category for a span from its night and Sunday membership.
    pub fn classify(is_night: bool, is_sunday: bool) -> Self {
        match (is_night, is_sunday) {
            (true, true) => HourCategory::NightSunday,
            (true, false) => HourCategory::Night,
            (false, true) => HourCategory::Sunday,
            (false, false) => HourCategory::Normal,
        }
    }
}

/// Worked hours split across the four [`HourCategory`] buckets.
///
/// Breakdowns add together bucket by bucket, which is how scenario totals
/// are built from day results.
///
/// # Example
///
/// ```
/// use shift_comparator::models::{HourBreakdown, HourCategory};
/// use rust_decimal::Decimal;
///
/// let mut breakdown = HourBreakdown::default();
/// HourBreakdown::add(&mut breakdown, HourCategory::Night, Decimal::from(2));
/// HourBreakdown::add(&mut breakdown, HourCategory::Normal, Decimal::from(1));
/// assert_eq!(breakdown.total_hours(), Decimal::from(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBreakdown {
    /// Hours that are neither night nor Sunday.
    pub normal: Decimal,
    /// Night hours on days other than Sunday.
    pub night: Decimal,
    /// Sunday hours outside the night window.
    pub sunday: Decimal,
    /// Night hours on a Sunday.
    pub night_sunday: Decimal,
}

impl HourBreakdown {
    /// Adds `hours` to the bucket for `category`.
    pub fn add(&mut self, category: HourCategory, hours: Decimal) {
        match category {
            HourCategory::Normal => self.normal += hours,
            HourCategory::Night => self.night += hours,
            HourCategory::Sunday => self.sunday += hours,
            HourCategory::NightSunday => self.night_sunday += hours,
        }
    }

    /// Returns the hours recorded in the bucket for `category`.
    pub fn hours(&self, category: HourCategory) -> Decimal {
        match category {
            HourCategory::Normal => self.normal,
            HourCategory::Night => self.night,
            HourCategory::Sunday => self.sunday,
            HourCategory::NightSunday => self.night_sunday,
        }
    }

    /// Sum of all four buckets.
    pub fn total_hours(&self) -> Decimal {
        self.normal + self.night + self.sunday + self.night_sunday
    }

    /// Returns true when no time has been recorded.
    pub fn is_empty(&self) -> bool {
        self.total_hours().is_zero()
    }
}

impl Add for HourBreakdown {
    type Output = HourBreakdown;

    fn add(mut self, rhs: HourBreakdown) -> HourBreakdown {
        self += rhs;
        self
    }
}

impl AddAssign for HourBreakdown {
    fn add_assign(&mut self, rhs: HourBreakdown) {
        self.normal += rhs.normal;
        self.night += rhs.night;
        self.sunday += rhs.sunday;
        self.night_sunday += rhs.night_sunday;
    }
}

impl Sum for HourBreakdown {
    fn sum<I: Iterator<Item = HourBreakdown>>(iter: I) -> Self {
        iter.fold(HourBreakdown::default(), Add::add)
    }
}

impl<'a> Sum<&'a HourBreakdown> for HourBreakdown {
    fn sum<I: Iterator<Item = &'a HourBreakdown>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_classify_covers_all_combinations() {
        assert_eq!(HourCategory::classify(false, false), HourCategory::Normal);
        assert_eq!(HourCategory::classify(true, false), HourCategory::Night);
        assert_eq!(HourCategory::classify(false, true), HourCategory::Sunday);
        assert_eq!(HourCategory::classify(true, true), HourCategory::NightSunday);
    }

    #[test]
    fn test_add_routes_hours_to_matching_bucket() {
        let mut breakdown = HourBreakdown::default();
        HourBreakdown::add(&mut breakdown, HourCategory::Normal, dec("1.5"));
        HourBreakdown::add(&mut breakdown, HourCategory::Night, dec("2"));
        HourBreakdown::add(&mut breakdown, HourCategory::Sunday, dec("0.25"));
        HourBreakdown::add(&mut breakdown, HourCategory::NightSunday, dec("3"));
        HourBreakdown::add(&mut breakdown, HourCategory::Night, dec("1"));

        assert_eq!(breakdown.normal, dec("1.5"));
        assert_eq!(breakdown.night, dec("3"));
        assert_eq!(breakdown.sunday, dec("0.25"));
        assert_eq!(breakdown.night_sunday, dec("3"));
        assert_eq!(breakdown.hours(HourCategory::Night), dec("3"));
        assert_eq!(breakdown.total_hours(), dec("7.75"));
    }

    #[test]
    fn test_default_breakdown_is_empty() {
        let breakdown = HourBreakdown::default();
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_breakdowns_sum_bucket_by_bucket() {
        let monday_night = HourBreakdown {
            normal: dec("1"),
            night: dec("8"),
            ..Default::default()
        };
        let sunday_afternoon = HourBreakdown {
            sunday: dec("7"),
            night_sunday: dec("2"),
            ..Default::default()
        };

        let total: HourBreakdown = [monday_night, sunday_afternoon].iter().sum();
        assert_eq!(total.normal, dec("1"));
        assert_eq!(total.night, dec("8"));
        assert_eq!(total.sunday, dec("7"));
        assert_eq!(total.night_sunday, dec("2"));
        assert_eq!(total, monday_night + sunday_afternoon);
    }

    #[test]
    fn test_breakdown_serialization() {
        let breakdown = HourBreakdown {
            normal: dec("1.0"),
            night: dec("8.0"),
            ..Default::default()
        };
        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"night\":\"8.0\""));
        assert!(json.contains("\"night_sunday\":\"0\""));
    }
}
