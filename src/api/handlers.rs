//! HTTP request handlers for the comparator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_scenario, rank};
use crate::error::ComparatorError;

use super::request::{ScenarioIdsRequest, ScenarioRequest};
use super::response::{
    ApiError, ApiErrorResponse, ComparisonResponse, DeletedResponse, SavedResponse,
    ScenarioListResponse, ScenarioResponse, ScenarioSummary,
};
use super::state::AppState;

/// Minimum number of saved scenarios a comparison needs.
pub const MIN_COMPARED_SCENARIOS: usize = 2;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/scenarios", get(list_handler))
        .route("/api/calculate", post(calculate_handler))
        .route("/api/save", post(save_handler))
        .route("/api/compare", post(compare_handler))
        .route("/api/delete", post(delete_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Logs a domain error and turns it into its HTTP response.
fn reject(correlation_id: Uuid, error: ComparatorError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request rejected"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Unwraps a JSON body, or builds the 400 response for a body axum could
/// not decode.
fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error).into_response())
}

/// Handler for GET /api/scenarios.
async fn list_handler(State(state): State<AppState>) -> Response {
    let store = state.store().read().await;
    let scenarios: Vec<ScenarioSummary> = store.list().iter().map(Into::into).collect();
    json_ok(ScenarioListResponse { scenarios })
}

/// Handler for POST /api/calculate.
///
/// Computes one scenario without saving it.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let scenario = match request.into_scenario(state.config().config()) {
        Ok(scenario) => scenario,
        Err(err) => return reject(correlation_id, err),
    };

    let start_time = Instant::now();
    let total = calculate_scenario(&scenario);
    info!(
        correlation_id = %correlation_id,
        scenario = %total.name,
        shifts_count = total.days.len(),
        total_pay = %total.total_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    json_ok(ScenarioResponse::new(correlation_id, &total))
}

/// Handler for POST /api/save.
async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing save request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let scenario = match request.into_scenario(state.config().config()) {
        Ok(scenario) => scenario,
        Err(err) => return reject(correlation_id, err),
    };

    let name = scenario.name.clone();
    let id = state.store().write().await.insert(scenario);
    info!(
        correlation_id = %correlation_id,
        scenario = %name,
        id,
        "Scenario saved"
    );

    json_ok(SavedResponse {
        success: true,
        message: format!("Scenario '{}' saved", name),
        id,
    })
}

/// Handler for POST /api/compare.
///
/// Ranks saved scenarios by total pay. Every id must exist.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioIdsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let provided = request.scenario_ids.len();
    if provided < MIN_COMPARED_SCENARIOS {
        let err = ComparatorError::NotEnoughScenarios {
            required: MIN_COMPARED_SCENARIOS,
            provided,
        };
        return reject(correlation_id, err);
    }

    let scenarios = {
        let store = state.store().read().await;
        let lookup: Result<Vec<_>, _> = request
            .scenario_ids
            .iter()
            .map(|&id| store.get(id).cloned())
            .collect();
        match lookup {
            Ok(scenarios) => scenarios,
            Err(err) => return reject(correlation_id, err),
        }
    };

    let start_time = Instant::now();
    let totals = scenarios.iter().map(calculate_scenario).collect();
    let comparison = rank(totals);
    info!(
        correlation_id = %correlation_id,
        scenarios_count = comparison.len(),
        best = comparison.best().map(|entry| entry.scenario.name.as_str()).unwrap_or_default(),
        spread = %comparison.spread(),
        duration_us = start_time.elapsed().as_micros(),
        "Comparison completed successfully"
    );

    json_ok(ComparisonResponse::new(correlation_id, &comparison))
}

/// Handler for POST /api/delete.
///
/// Unknown ids are ignored; the response reports how many were removed.
async fn delete_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioIdsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let deleted = state.store().write().await.remove(&request.scenario_ids);
    info!(
        correlation_id = %correlation_id,
        requested = request.scenario_ids.len(),
        deleted,
        "Scenarios deleted"
    );

    json_ok(DeletedResponse {
        success: true,
        message: format!("{} scenario(s) deleted", deleted),
        deleted,
    })
}
