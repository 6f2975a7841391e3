//! Scenario input model.

use rust_decimal::Decimal;
use serde::Serialize;

use super::WorkShift;

/// A named candidate schedule evaluated as a unit.
///
/// Shifts keep their input order; overlapping shifts are allowed and are
/// paid independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    /// Display name of the scenario.
    pub name: String,
    /// The shifts in the order they were supplied.
    pub shifts: Vec<WorkShift>,
    /// Base hourly rate applied to every shift.
    pub hourly_rate: Decimal,
}

impl Scenario {
    /// Creates a scenario from already resolved shifts.
    pub fn new(name: impl Into<String>, shifts: Vec<WorkShift>, hourly_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            shifts,
            hourly_rate,
        }
    }

    /// Number of shifts in the scenario.
    pub fn day_count(&self) -> usize {
        self.shifts.len()
    }
}
