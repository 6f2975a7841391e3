//! Error types for the shift comparator.
//!
//! The pay computation itself never fails once it has typed inputs; every
//! variant here is a rejection raised while turning user input (text, JSON,
//! configuration files, store lookups) into those typed inputs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the shift comparator.
///
/// # Example
///
/// ```
/// use shift_comparator::error::ComparatorError;
///
/// let error = ComparatorError::UnknownShiftKind {
///     token: "evening".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown shift kind: evening");
/// ```
#[derive(Debug, Error)]
pub enum ComparatorError {
    /// A shift kind token did not name one of the known shift kinds.
    #[error("Unknown shift kind: {token}")]
    UnknownShiftKind {
        /// The token that was not recognized.
        token: String,
    },

    /// A date string was in neither of the accepted formats.
    #[error("Invalid date '{input}': expected YYYY-MM-DD or DD/MM/YYYY")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
    },

    /// A shift on this date would end past the last representable instant.
    #[error("Date out of range: {date}")]
    DateOutOfRange {
        /// The shift's start date.
        date: NaiveDate,
    },

    /// An hourly rate outside the accepted range.
    #[error("Invalid hourly rate {rate}: expected a value between 0 and {max}")]
    InvalidRate {
        /// The rejected rate.
        rate: Decimal,
        /// The largest accepted rate.
        max: Decimal,
    },

    /// A scenario was submitted without any shifts.
    #[error("Scenario '{name}' has no shifts")]
    EmptyScenario {
        /// The name of the empty scenario.
        name: String,
    },

    /// A saved scenario id does not exist in the store.
    #[error("Scenario not found: {id}")]
    ScenarioNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// A comparison was requested with too few scenarios.
    #[error("At least {required} scenarios are required for a comparison, got {provided}")]
    NotEnoughScenarios {
        /// The minimum number of scenarios.
        required: usize,
        /// The number of scenarios supplied.
        provided: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return ComparatorError.
pub type ComparatorResult<T> = Result<T, ComparatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shift_kind_displays_token() {
        let error = ComparatorError::UnknownShiftKind {
            token: "evening".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown shift kind: evening");
    }

    #[test]
    fn test_invalid_date_displays_input_and_formats() {
        let error = ComparatorError::InvalidDate {
            input: "13.01.2026".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '13.01.2026': expected YYYY-MM-DD or DD/MM/YYYY"
        );
    }

    #[test]
    fn test_date_out_of_range_displays_date() {
        let error = ComparatorError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
        };
        assert_eq!(error.to_string(), "Date out of range: 2026-01-18");
    }

    #[test]
    fn test_invalid_rate_displays_bounds() {
        let error = ComparatorError::InvalidRate {
            rate: Decimal::from(-1),
            max: Decimal::from(1_000_000),
        };
        assert_eq!(
            error.to_string(),
            "Invalid hourly rate -1: expected a value between 0 and 1000000"
        );
    }

    #[test]
    fn test_empty_scenario_displays_name() {
        let error = ComparatorError::EmptyScenario {
            name: "Week 1".to_string(),
        };
        assert_eq!(error.to_string(), "Scenario 'Week 1' has no shifts");
    }

    #[test]
    fn test_scenario_not_found_displays_id() {
        let error = ComparatorError::ScenarioNotFound { id: 42 };
        assert_eq!(error.to_string(), "Scenario not found: 42");
    }

    #[test]
    fn test_not_enough_scenarios_displays_counts() {
        let error = ComparatorError::NotEnoughScenarios {
            required: 2,
            provided: 1,
        };
        assert_eq!(
            error.to_string(),
            "At least 2 scenarios are required for a comparison, got 1"
        );
    }

    #[test]
    fn test_config_errors_display_path() {
        let missing = ComparatorError::ConfigNotFound {
            path: "/missing/comparator.yaml".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "Configuration file not found: /missing/comparator.yaml"
        );

        let bad = ComparatorError::ConfigParseError {
            path: "config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            bad.to_string(),
            "Failed to parse configuration file 'config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ComparatorError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_kind() -> ComparatorResult<()> {
            Err(ComparatorError::UnknownShiftKind {
                token: "x".to_string(),
            })
        }

        fn propagates_error() -> ComparatorResult<()> {
            returns_unknown_kind()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
