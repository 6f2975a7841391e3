//! Core data models for the shift comparator.
//!
//! This module contains all the domain models used throughout the crate.

mod breakdown;
mod pay_result;
mod scenario;
mod shift;

pub use breakdown::{HourBreakdown, HourCategory};
pub use pay_result::{DayPayResult, ScenarioTotal};
pub use scenario::Scenario;
pub use shift::{ShiftDefinition, ShiftKind, WorkShift};
