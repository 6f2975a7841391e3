//! Response types for the comparator API.
//!
//! This module defines the JSON bodies returned by the handlers and the
//! mapping from [`ComparatorError`] to HTTP error responses. Money and
//! percentages are rounded to two decimals here, at the edge; the
//! calculation results keep full precision.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{RankedComparison, RankedScenario};
use crate::error::ComparatorError;
use crate::models::{DayPayResult, HourBreakdown, ScenarioTotal, ShiftKind};

use super::state::StoredScenario;

const MONEY_DP: u32 = 2;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A `400 Bad Request` with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<ComparatorError> for ApiErrorResponse {
    fn from(error: ComparatorError) -> Self {
        let message = error.to_string();
        match error {
            ComparatorError::UnknownShiftKind { .. } => Self::bad_request(ApiError::with_details(
                "UNKNOWN_SHIFT_KIND",
                message,
                "Accepted shift kinds: morning, afternoon, night",
            )),
            ComparatorError::InvalidDate { .. } => {
                Self::bad_request(ApiError::new("INVALID_DATE", message))
            }
            ComparatorError::DateOutOfRange { .. } => {
                Self::bad_request(ApiError::new("INVALID_DATE", message))
            }
            ComparatorError::InvalidRate { .. } => {
                Self::bad_request(ApiError::new("INVALID_RATE", message))
            }
            ComparatorError::EmptyScenario { .. } => {
                Self::bad_request(ApiError::new("EMPTY_SCENARIO", message))
            }
            ComparatorError::NotEnoughScenarios { .. } => {
                Self::bad_request(ApiError::new("NOT_ENOUGH_SCENARIOS", message))
            }
            ComparatorError::ScenarioNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SCENARIO_NOT_FOUND", message),
            },
            ComparatorError::ConfigNotFound { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            ComparatorError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    message,
                ),
            },
        }
    }
}

/// One shift of a calculated scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResponse {
    /// Calendar date the shift starts on.
    pub date: NaiveDate,
    /// English weekday name of `date`.
    pub day_name: String,
    /// The shift kind.
    pub shift_type: ShiftKind,
    /// Shift start instant.
    pub start: NaiveDateTime,
    /// Shift end instant.
    pub end: NaiveDateTime,
    /// Hours worked.
    pub hours: Decimal,
    /// Total pay for the shift.
    pub pay: Decimal,
    /// Bonus part of `pay`.
    pub bonus: Decimal,
}

impl From<&DayPayResult> for DayResponse {
    fn from(day: &DayPayResult) -> Self {
        Self {
            date: day.shift.date(),
            day_name: day.shift.date().format("%A").to_string(),
            shift_type: day.shift.kind(),
            start: day.shift.start(),
            end: day.shift.end(),
            hours: day.total_hours(),
            pay: day.total_pay.round_dp(MONEY_DP),
            bonus: day.bonus_pay.round_dp(MONEY_DP),
        }
    }
}

/// Response body for `/api/calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResponse {
    /// Correlation id of the request.
    pub calculation_id: Uuid,
    /// Scenario name.
    pub name: String,
    /// Base hourly rate used.
    pub hourly_rate: Decimal,
    /// Hours worked across all shifts.
    pub total_hours: Decimal,
    /// Total pay, bonuses included.
    pub total_pay: Decimal,
    /// Bonus part of `total_pay`.
    pub total_bonus: Decimal,
    /// Hours per category.
    pub breakdown: HourBreakdown,
    /// Per-shift results in input order.
    pub days: Vec<DayResponse>,
}

impl ScenarioResponse {
    /// Builds the response for a calculated scenario.
    pub fn new(calculation_id: Uuid, total: &ScenarioTotal) -> Self {
        Self {
            calculation_id,
            name: total.name.clone(),
            hourly_rate: total.hourly_rate,
            total_hours: total.total_hours(),
            total_pay: total.total_pay.round_dp(MONEY_DP),
            total_bonus: total.bonus_pay.round_dp(MONEY_DP),
            breakdown: total.breakdown,
            days: total.days.iter().map(DayResponse::from).collect(),
        }
    }
}

/// Headline figures of the best scenario in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScenario {
    /// Scenario name.
    pub name: String,
    /// Total pay.
    pub total_pay: Decimal,
    /// Hours worked.
    pub total_hours: Decimal,
    /// Bonus part of `total_pay`.
    pub total_bonus: Decimal,
}

/// One row of the ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based rank.
    pub rank: usize,
    /// Scenario name.
    pub name: String,
    /// Hours worked.
    pub hours: Decimal,
    /// Total pay.
    pub pay: Decimal,
    /// Bonus part of `pay`.
    pub bonus: Decimal,
    /// How much less than the best this scenario pays.
    pub difference: Decimal,
    /// Pay as a percentage of the best.
    pub percentage: Decimal,
}

impl From<&RankedScenario> for RankingEntry {
    fn from(entry: &RankedScenario) -> Self {
        Self {
            rank: entry.rank,
            name: entry.scenario.name.clone(),
            hours: entry.scenario.total_hours(),
            pay: entry.scenario.total_pay.round_dp(MONEY_DP),
            bonus: entry.scenario.bonus_pay.round_dp(MONEY_DP),
            difference: entry.gap_to_best.round_dp(MONEY_DP),
            percentage: entry.percent_of_best.round_dp(MONEY_DP),
        }
    }
}

/// Response body for `/api/compare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    /// Correlation id of the request.
    pub calculation_id: Uuid,
    /// The top-ranked scenario; absent only for an empty comparison.
    pub best: Option<BestScenario>,
    /// All scenarios, best first.
    pub ranking: Vec<RankingEntry>,
}

impl ComparisonResponse {
    /// Builds the response for a ranked comparison.
    pub fn new(calculation_id: Uuid, comparison: &RankedComparison) -> Self {
        let best = comparison.best().map(|entry| BestScenario {
            name: entry.scenario.name.clone(),
            total_pay: entry.scenario.total_pay.round_dp(MONEY_DP),
            total_hours: entry.scenario.total_hours(),
            total_bonus: entry.scenario.bonus_pay.round_dp(MONEY_DP),
        });

        Self {
            calculation_id,
            best,
            ranking: comparison.entries().iter().map(RankingEntry::from).collect(),
        }
    }
}

/// Response body for `/api/save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedResponse {
    /// Always `true`; failures use [`ApiError`].
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
    /// Store id of the saved scenario.
    pub id: u64,
}

/// Response body for `/api/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Always `true`; unknown ids are not an error.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
    /// Number of scenarios actually removed.
    pub deleted: usize,
}

/// One saved scenario in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    /// Store id.
    pub id: u64,
    /// Scenario name.
    pub name: String,
    /// Number of shifts.
    pub days: usize,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
}

impl From<&StoredScenario> for ScenarioSummary {
    fn from(entry: &StoredScenario) -> Self {
        Self {
            id: entry.id,
            name: entry.scenario.name.clone(),
            days: entry.scenario.day_count(),
            hourly_rate: entry.scenario.hourly_rate,
        }
    }
}

/// Response body for `GET /api/scenarios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioListResponse {
    /// Saved scenarios in insertion order.
    pub scenarios: Vec<ScenarioSummary>,
}
