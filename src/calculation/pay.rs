//! Base and bonus pay from categorized hours.
//!
//! Every worked hour earns the base rate. Night hours add 15% of the rate,
//! Sunday hours add 25%, and hours that are both add the two surcharges
//! together (40%).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::HourBreakdown;

/// Night surcharge as a fraction of the base rate (15%).
pub const NIGHT_BONUS_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Sunday surcharge as a fraction of the base rate (25%).
pub const SUNDAY_BONUS_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Base, bonus and total pay for a set of categorized hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayAmounts {
    /// All hours at the base rate.
    pub base_pay: Decimal,
    /// Night and Sunday surcharges.
    pub bonus_pay: Decimal,
    /// Base plus bonus.
    pub total_pay: Decimal,
}

/// Surcharge fraction for hours that are both night and Sunday.
pub fn night_sunday_bonus_rate() -> Decimal {
    NIGHT_BONUS_RATE + SUNDAY_BONUS_RATE
}

/// Prices an [`HourBreakdown`] at `hourly_rate`.
///
/// The rate is not validated: zero or negative rates flow through the
/// arithmetic unchanged.
///
/// # Example
///
/// ```
/// use shift_comparator::calculation::calculate_pay;
/// use shift_comparator::models::HourBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Sunday afternoon: 7 Sunday hours, 2 night+Sunday hours
/// let breakdown = HourBreakdown {
///     sunday: Decimal::from(7),
///     night_sunday: Decimal::from(2),
///     ..Default::default()
/// };
///
/// let pay = calculate_pay(&breakdown, Decimal::from(13));
/// assert_eq!(pay.base_pay, Decimal::from(117));
/// // 7 × 13 × 0.25 + 2 × 13 × 0.40 = 22.75 + 10.40
/// assert_eq!(pay.bonus_pay, Decimal::from_str("33.15").unwrap());
/// assert_eq!(pay.total_pay, Decimal::from_str("150.15").unwrap());
/// ```
pub fn calculate_pay(breakdown: &HourBreakdown, hourly_rate: Decimal) -> PayAmounts {
    let base_pay = breakdown.total_hours() * hourly_rate;

    let night_bonus = breakdown.night * hourly_rate * NIGHT_BONUS_RATE;
    let sunday_bonus = breakdown.sunday * hourly_rate * SUNDAY_BONUS_RATE;
    let night_sunday_bonus = breakdown.night_sunday * hourly_rate * night_sunday_bonus_rate();
    let bonus_pay = night_bonus + sunday_bonus + night_sunday_bonus;

    PayAmounts {
        base_pay,
        bonus_pay,
        total_pay: base_pay + bonus_pay,
    }
}
