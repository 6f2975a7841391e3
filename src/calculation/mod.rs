//! Calculation logic for the shift comparator.
//!
//! This module contains the hour categorizer, the pay accumulator, the
//! scenario aggregator and the scenario ranker.

mod categorize;
mod pay;
mod ranking;
mod scenario;

pub use categorize::{
    HourSlice, NIGHT_END_HOUR, NIGHT_START_HOUR, categorize_hours, is_night, is_sunday,
    slice_by_hour,
};
pub use pay::{
    NIGHT_BONUS_RATE, PayAmounts, SUNDAY_BONUS_RATE, calculate_pay, night_sunday_bonus_rate,
};
pub use ranking::{RankedComparison, RankedScenario, rank};
pub use scenario::{calculate_scenario, calculate_work_shift, compute, compute_scenario};
