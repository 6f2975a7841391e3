//! Request types for the comparator API.
//!
//! Shift kinds and dates arrive as free text and are resolved into typed
//! values by [`ScenarioRequest::into_scenario`], so that bad tokens surface
//! as domain errors rather than generic JSON rejections.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::dates::parse_date;
use crate::error::{ComparatorError, ComparatorResult};
use crate::models::{Scenario, ShiftKind, WorkShift};

/// Largest hourly rate a request may carry.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Request body for `/api/calculate` and `/api/save`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// Scenario name; the configured default when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Base hourly rate; the configured default when absent.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// The shifts worked in this scenario.
    pub shifts: Vec<ShiftRequest>,
}

/// One shift in a scenario request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// `YYYY-MM-DD` or `DD/MM/YYYY`.
    pub date: String,
    /// Shift kind token, e.g. `"night"` or `"NUIT"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request body for `/api/compare` and `/api/delete`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioIdsRequest {
    /// Ids of saved scenarios.
    #[serde(default)]
    pub scenario_ids: Vec<u64>,
}

impl ShiftRequest {
    /// Creates a shift request from raw text.
    pub fn new(date: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            kind: kind.into(),
        }
    }

    /// Resolves the date and kind into a [`WorkShift`].
    pub fn to_work_shift(&self) -> ComparatorResult<WorkShift> {
        let kind: ShiftKind = self.kind.parse()?;
        let date = parse_date(&self.date)?;
        WorkShift::try_new(date, kind)
    }
}

impl ScenarioRequest {
    /// Resolves the request into a [`Scenario`], filling the name and rate
    /// from `defaults`.
    ///
    /// # Returns
    ///
    /// Returns the scenario on success, or:
    /// - `EmptyScenario` if `shifts` is empty
    /// - `InvalidRate` if the rate is negative or above [`MAX_HOURLY_RATE`]
    /// - `UnknownShiftKind`, `InvalidDate` or `DateOutOfRange` for the first
    ///   bad shift
    pub fn into_scenario(self, defaults: &AppConfig) -> ComparatorResult<Scenario> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| defaults.default_scenario_name.clone());

        if self.shifts.is_empty() {
            return Err(ComparatorError::EmptyScenario { name });
        }

        let hourly_rate = self.hourly_rate.unwrap_or(defaults.default_hourly_rate);
        if hourly_rate < Decimal::ZERO || hourly_rate > MAX_HOURLY_RATE {
            return Err(ComparatorError::InvalidRate {
                rate: hourly_rate,
                max: MAX_HOURLY_RATE,
            });
        }

        let shifts = self
            .shifts
            .iter()
            .map(ShiftRequest::to_work_shift)
            .collect::<ComparatorResult<Vec<_>>>()?;

        Ok(Scenario::new(name, shifts, hourly_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_scenario_request() {
        let json = r#"{
            "name": "Week A",
            "hourly_rate": "13.00",
            "shifts": [
                {"date": "2026-01-12", "type": "morning"},
                {"date": "18/01/2026", "type": "NUIT"}
            ]
        }"#;

        let request: ScenarioRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("Week A"));
        assert_eq!(request.hourly_rate, Some(Decimal::from(13)));
        assert_eq!(request.shifts.len(), 2);
        assert_eq!(request.shifts[1].kind, "NUIT");
    }

    #[test]
    fn test_numeric_hourly_rate_is_accepted() {
        let json = r#"{"hourly_rate": 13, "shifts": []}"#;
        let request: ScenarioRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.hourly_rate, Some(Decimal::from(13)));
    }

    #[test]
    fn test_into_scenario_resolves_shifts() {
        let request = ScenarioRequest {
            name: Some("Week A".to_string()),
            hourly_rate: Some(Decimal::from(13)),
            shifts: vec![
                ShiftRequest::new("2026-01-12", "morning"),
                ShiftRequest::new("18/01/2026", "NUIT"),
            ],
        };

        let scenario = request.into_scenario(&AppConfig::default()).unwrap();
        assert_eq!(scenario.name, "Week A");
        assert_eq!(scenario.hourly_rate, Decimal::from(13));
        assert_eq!(scenario.shifts[0].kind(), ShiftKind::Morning);
        assert_eq!(scenario.shifts[1].kind(), ShiftKind::Night);
        assert_eq!(scenario.shifts[1].date(), make_date("2026-01-18"));
    }

    #[test]
    fn test_missing_name_and_rate_use_defaults() {
        let request = ScenarioRequest {
            name: Some("   ".to_string()),
            hourly_rate: None,
            shifts: vec![ShiftRequest::new("2026-01-12", "afternoon")],
        };

        let scenario = request.into_scenario(&AppConfig::default()).unwrap();
        assert_eq!(scenario.name, "Scenario");
        assert_eq!(scenario.hourly_rate, Decimal::from(20));
    }

    #[test]
    fn test_empty_shift_list_is_rejected() {
        let request = ScenarioRequest {
            name: Some("Nothing".to_string()),
            hourly_rate: None,
            shifts: vec![],
        };

        match request.into_scenario(&AppConfig::default()) {
            Err(ComparatorError::EmptyScenario { name }) => assert_eq!(name, "Nothing"),
            other => panic!("Expected EmptyScenario error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let request = ScenarioRequest {
            name: None,
            hourly_rate: None,
            shifts: vec![ShiftRequest::new("2026-01-12", "evening")],
        };

        assert!(matches!(
            request.into_scenario(&AppConfig::default()),
            Err(ComparatorError::UnknownShiftKind { .. })
        ));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let request = ScenarioRequest {
            name: None,
            hourly_rate: None,
            shifts: vec![ShiftRequest::new("12.01.2026", "morning")],
        };

        assert!(matches!(
            request.into_scenario(&AppConfig::default()),
            Err(ComparatorError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_shift_past_last_representable_instant_is_rejected() {
        let request = ScenarioRequest {
            name: None,
            hourly_rate: None,
            shifts: vec![ShiftRequest::new("+262142-12-31", "night")],
        };

        assert!(matches!(
            request.into_scenario(&AppConfig::default()),
            Err(ComparatorError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rate_bounds() {
        let with_rate = |rate: &str| ScenarioRequest {
            name: None,
            hourly_rate: Some(Decimal::from_str(rate).unwrap()),
            shifts: vec![ShiftRequest::new("2026-01-12", "morning")],
        };

        assert!(with_rate("0").into_scenario(&AppConfig::default()).is_ok());
        assert!(with_rate("1000000").into_scenario(&AppConfig::default()).is_ok());
        for rate in ["-0.01", "1000000.01", "79228162514264337593543950335"] {
            assert!(
                matches!(
                    with_rate(rate).into_scenario(&AppConfig::default()),
                    Err(ComparatorError::InvalidRate { .. })
                ),
                "{rate}"
            );
        }
    }

    #[test]
    fn test_ids_request_defaults_to_empty() {
        let request: ScenarioIdsRequest = serde_json::from_str("{}").unwrap();
        assert!(request.scenario_ids.is_empty());
    }
}
