//! Plain-text reports for scenario results and comparisons.
//!
//! Amounts are rounded to two decimals for display only; the underlying
//! results keep full precision.

use std::fmt;

use rust_decimal::Decimal;

use crate::calculation::RankedComparison;
use crate::models::{HourBreakdown, HourCategory, ScenarioTotal};

const RULE_WIDTH: usize = 80;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn category_label(category: HourCategory) -> &'static str {
    match category {
        HourCategory::Normal => "Normal hours:              ",
        HourCategory::Night => "Night hours (+15%):        ",
        HourCategory::Sunday => "Sunday hours (+25%):       ",
        HourCategory::NightSunday => "Night+Sunday hours (+40%): ",
    }
}

/// Writes the non-zero hour buckets, one per line, with a label prefix.
fn write_breakdown(
    f: &mut fmt::Formatter<'_>,
    breakdown: &HourBreakdown,
    prefix: &str,
) -> fmt::Result {
    for category in HourCategory::ALL {
        let hours = breakdown.hours(category);
        if hours > Decimal::ZERO {
            writeln!(f, "{prefix}{}{:>6.2}h", category_label(category), hours)?;
        }
    }
    Ok(())
}

/// Text report for one scenario.
///
/// With `detailed` set, every shift gets its own block before the summary.
pub struct ScenarioReport<'a> {
    /// The scenario to describe.
    pub total: &'a ScenarioTotal,
    /// Include the per-day blocks.
    pub detailed: bool,
}

impl fmt::Display for ScenarioReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total;
        writeln!(f, "{}", heavy_rule())?;
        writeln!(f, "SCENARIO: {}", total.name)?;
        writeln!(f, "Base hourly rate: {:.2}/h", total.hourly_rate)?;
        writeln!(f, "{}", heavy_rule())?;

        if self.detailed {
            writeln!(f, "\nDETAIL BY DAY:")?;
            writeln!(f, "{}", light_rule())?;

            for day in &total.days {
                let shift = &day.shift;
                writeln!(f, "\n{} - {}", shift.date().format("%A %d/%m/%Y"), shift.kind())?;
                writeln!(
                    f,
                    "  Hours: {} -> {}",
                    shift.start().format("%H:%M"),
                    shift.end().format("%H:%M on %d/%m")
                )?;
                write_breakdown(f, &day.breakdown, "  ")?;
                writeln!(f, "  Base pay:                  {:>8.2}", day.base_pay)?;
                writeln!(f, "  Bonuses:                   {:>8.2}", day.bonus_pay)?;
                writeln!(f, "  DAY TOTAL:                 {:>8.2}", day.total_pay)?;
            }
        }

        writeln!(f, "\n{}", heavy_rule())?;
        writeln!(f, "SUMMARY")?;
        writeln!(f, "{}", heavy_rule())?;
        write_breakdown(f, &total.breakdown, "Total ")?;
        writeln!(f, "\nTotal hours worked:              {:>6.2}h", total.total_hours())?;
        writeln!(f, "Total bonuses:                 {:>8.2}", total.bonus_pay)?;
        writeln!(f, "\nTOTAL PAY:                     {:>8.2}", total.total_pay)?;
        write!(f, "{}", heavy_rule())
    }
}

/// Text report for a ranked comparison: optional per-scenario detail, the
/// ranking table and a conclusion.
pub struct ComparisonReport<'a> {
    /// The ranked scenarios.
    pub comparison: &'a RankedComparison,
    /// Include each scenario's detailed report, best first.
    pub detailed: bool,
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = self.comparison;

        if self.detailed {
            for entry in comparison.entries() {
                let report = ScenarioReport {
                    total: &entry.scenario,
                    detailed: true,
                };
                write!(f, "{}\n\n\n", report)?;
            }
        }

        writeln!(f, "{}", heavy_rule())?;
        writeln!(f, "SCENARIO RANKING")?;
        writeln!(f, "{}", heavy_rule())?;

        let Some(best) = comparison.best() else {
            writeln!(f, "\nNo scenarios to compare.")?;
            return write!(f, "{}", heavy_rule());
        };

        writeln!(
            f,
            "\n{:<6} {:<30} {:<10} {:<15} {}",
            "Rank", "Scenario", "Hours", "Pay", "Gap"
        )?;
        writeln!(f, "{}", light_rule())?;

        for entry in comparison.entries() {
            let gap = if entry.gap_to_best > Decimal::ZERO {
                format!("-{:.2}", entry.gap_to_best)
            } else {
                "BEST".to_string()
            };
            writeln!(
                f,
                "{:<6} {:<30} {:>6.2}h   {:>10.2}    {} ({:.1}%)",
                entry.rank,
                entry.scenario.name,
                entry.scenario.total_hours(),
                entry.scenario.total_pay,
                gap,
                entry.percent_of_best
            )?;
        }

        writeln!(f, "\n{}", heavy_rule())?;
        writeln!(f, "CONCLUSION")?;
        writeln!(f, "{}", heavy_rule())?;
        writeln!(f, "\nBEST SCENARIO: {}", best.scenario.name)?;
        writeln!(
            f,
            "  -> {:.2} for {:.2}h",
            best.scenario.total_pay,
            best.scenario.total_hours()
        )?;
        writeln!(f, "  -> Bonuses: {:.2}", best.scenario.bonus_pay)?;

        if comparison.len() > 1 {
            writeln!(f, "\nGain over the worst scenario: {:.2}", comparison.spread())?;
        }
        write!(f, "{}", heavy_rule())
    }
}

/// Formats one scenario's result.
///
/// # Example
///
/// ```
/// use shift_comparator::calculation::compute_scenario;
/// use shift_comparator::models::ShiftKind;
/// use shift_comparator::report::format_scenario;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let total = compute_scenario(
///     "One morning",
///     &[(ShiftKind::Morning, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())],
///     Decimal::from(13),
/// );
/// let report = format_scenario(&total, false);
/// assert!(report.contains("SCENARIO: One morning"));
/// assert!(report.contains("117.00"));
/// ```
pub fn format_scenario(total: &ScenarioTotal, detailed: bool) -> String {
    ScenarioReport { total, detailed }.to_string()
}

/// Formats a ranked comparison.
pub fn format_comparison(comparison: &RankedComparison, detailed: bool) -> String {
    ComparisonReport {
        comparison,
        detailed,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_scenario, rank};
    use crate::models::ShiftKind;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn sunday_afternoon() -> ScenarioTotal {
        compute_scenario(
            "Sunday afternoon",
            &[(ShiftKind::Afternoon, make_date("2026-01-18"))],
            Decimal::from(13),
        )
    }

    fn weekday_mornings() -> ScenarioTotal {
        compute_scenario(
            "Weekday mornings",
            &[
                (ShiftKind::Morning, make_date("2026-01-12")),
                (ShiftKind::Morning, make_date("2026-01-13")),
            ],
            Decimal::from(13),
        )
    }

    #[test]
    fn test_summary_lists_only_non_zero_buckets() {
        let report = format_scenario(&weekday_mornings(), false);
        assert!(report.contains("Total Normal hours:"));
        assert!(!report.contains("Night hours"));
        assert!(!report.contains("Sunday hours"));
        assert!(report.contains("TOTAL PAY:"));
        assert!(report.contains("234.00"));
    }

    #[test]
    fn test_detailed_report_has_a_block_per_day() {
        let report = format_scenario(&sunday_afternoon(), true);
        assert!(report.contains("DETAIL BY DAY:"));
        assert!(!report.contains("Normal hours"));
        assert!(report.contains("Sunday 18/01/2026 - afternoon"));
        assert!(report.contains("Hours: 14:00 -> 23:00 on 18/01"));
        assert!(report.contains("Sunday hours (+25%):"));
        assert!(report.contains("7.00h"));
        assert!(report.contains("Night+Sunday hours (+40%):"));
        assert!(report.contains("2.00h"));
        assert!(report.contains("33.15"));
        assert!(report.contains("150.15"));
    }

    #[test]
    fn test_summary_report_omits_day_blocks() {
        let report = format_scenario(&sunday_afternoon(), false);
        assert!(!report.contains("DETAIL BY DAY:"));
    }

    #[test]
    fn test_comparison_table_marks_best_and_gaps() {
        let ranking = rank(vec![sunday_afternoon(), weekday_mornings()]);
        let report = format_comparison(&ranking, false);

        assert!(report.contains("SCENARIO RANKING"));
        assert!(report.contains("BEST (100.0%)"));
        // 234.00 - 150.15
        assert!(report.contains("-83.85"));
        assert!(report.contains("BEST SCENARIO: Weekday mornings"));
        assert!(report.contains("Gain over the worst scenario: 83.85"));
    }

    #[test]
    fn test_single_scenario_comparison_has_no_gain_line() {
        let ranking = rank(vec![sunday_afternoon()]);
        let report = format_comparison(&ranking, false);
        assert!(report.contains("BEST SCENARIO: Sunday afternoon"));
        assert!(!report.contains("Gain over the worst scenario"));
    }

    #[test]
    fn test_detailed_comparison_includes_each_scenario() {
        let ranking = rank(vec![sunday_afternoon(), weekday_mornings()]);
        let report = format_comparison(&ranking, true);
        assert!(report.contains("SCENARIO: Sunday afternoon"));
        assert!(report.contains("SCENARIO: Weekday mornings"));
        // ranked order: best first
        let best_at = report.find("SCENARIO: Weekday mornings").unwrap();
        let worst_at = report.find("SCENARIO: Sunday afternoon").unwrap();
        assert!(best_at < worst_at);
    }

    #[test]
    fn test_reports_display_inside_other_text() {
        let total = sunday_afternoon();
        let report = ScenarioReport {
            total: &total,
            detailed: false,
        };
        let framed = format!("<<{}>>", report);
        assert!(framed.starts_with("<<===="));
        assert!(framed.ends_with("====>>"));
        assert_eq!(report.to_string(), format_scenario(&total, false));

        let ranking = rank(vec![total.clone(), weekday_mornings()]);
        let comparison = ComparisonReport {
            comparison: &ranking,
            detailed: true,
        };
        assert_eq!(comparison.to_string(), format_comparison(&ranking, true));
    }

    #[test]
    fn test_empty_comparison() {
        let report = format_comparison(&rank(vec![]), true);
        assert!(report.contains("No scenarios to compare."));
        assert!(!report.contains("BEST SCENARIO"));
    }
}
