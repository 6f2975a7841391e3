//! HTTP API module for the shift comparator.
//!
//! This module provides the REST endpoints for calculating, saving,
//! comparing and deleting scenarios. Saved scenarios live in memory for
//! the lifetime of the process.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MIN_COMPARED_SCENARIOS, create_router};
pub use request::{MAX_HOURLY_RATE, ScenarioIdsRequest, ScenarioRequest, ShiftRequest};
pub use response::{
    ApiError, ApiErrorResponse, BestScenario, ComparisonResponse, DayResponse, DeletedResponse,
    RankingEntry, SavedResponse, ScenarioListResponse, ScenarioResponse, ScenarioSummary,
};
pub use state::{AppState, ScenarioStore, StoredScenario};
