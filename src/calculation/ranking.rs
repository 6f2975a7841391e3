//! Ranking scenario totals against each other.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::ScenarioTotal;

/// One scenario's position in a [`RankedComparison`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedScenario {
    /// 1-based position, best first.
    pub rank: usize,
    /// The ranked scenario.
    pub scenario: ScenarioTotal,
    /// How much less this scenario pays than the best one (zero for the best).
    pub gap_to_best: Decimal,
    /// This scenario's pay as a percentage of the best one's.
    pub percent_of_best: Decimal,
}

/// Scenarios ordered by total pay, highest first.
///
/// Built by [`rank`]; never stored, recomputed on each comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedComparison {
    entries: Vec<RankedScenario>,
}

impl RankedComparison {
    /// All entries in rank order.
    pub fn entries(&self) -> &[RankedScenario] {
        &self.entries
    }

    /// The highest-paying scenario, absent for an empty comparison.
    pub fn best(&self) -> Option<&RankedScenario> {
        self.entries.first()
    }

    /// The lowest-paying scenario, absent for an empty comparison.
    pub fn worst(&self) -> Option<&RankedScenario> {
        self.entries.last()
    }

    /// Number of ranked scenarios.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pay difference between the best and the worst scenario.
    pub fn spread(&self) -> Decimal {
        match (self.best(), self.worst()) {
            (Some(best), Some(worst)) => best.scenario.total_pay - worst.scenario.total_pay,
            _ => Decimal::ZERO,
        }
    }
}

/// Ranks scenario totals by total pay, descending.
///
/// Ties keep their input order. When the best scenario pays exactly zero,
/// every scenario is reported at 100% of the best.
///
/// # Example
///
/// ```
/// use shift_comparator::calculation::{compute_scenario, rank};
/// use shift_comparator::models::ShiftKind;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// let rate = Decimal::from(13);
///
/// let ranking = rank(vec![
///     compute_scenario("Monday morning", &[(ShiftKind::Morning, monday)], rate),
///     compute_scenario("Sunday afternoon", &[(ShiftKind::Afternoon, sunday)], rate),
/// ]);
///
/// let best = ranking.best().unwrap();
/// assert_eq!(best.scenario.name, "Sunday afternoon");
/// assert_eq!(best.gap_to_best, Decimal::ZERO);
/// assert_eq!(ranking.worst().unwrap().scenario.name, "Monday morning");
/// ```
pub fn rank(scenarios: Vec<ScenarioTotal>) -> RankedComparison {
    let mut sorted = scenarios;
    // sort_by is stable, so equal totals keep their input order
    sorted.sort_by(|a, b| b.total_pay.cmp(&a.total_pay));

    let best_pay = match sorted.first() {
        Some(best) => best.total_pay,
        None => return RankedComparison::default(),
    };
    let hundred = Decimal::ONE_HUNDRED;

    let entries: Vec<RankedScenario> = sorted
        .into_iter()
        .enumerate()
        .map(|(index, scenario)| {
            let gap_to_best = best_pay - scenario.total_pay;
            let percent_of_best = if best_pay.is_zero() {
                hundred
            } else {
                scenario.total_pay / best_pay * hundred
            };
            RankedScenario {
                rank: index + 1,
                scenario,
                gap_to_best,
                percent_of_best,
            }
        })
        .collect();

    debug!(
        scenarios = entries.len(),
        best_pay = %best_pay,
        "Scenarios ranked"
    );

    RankedComparison { entries }
}
