use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::{
    api::booking_times::TimeRuleResponse,
    api::middleware::{ApiError, ApiResult, AppState},
    models::{CreateTimeRuleRequest, TimeRule, UpdateTimeRuleRequest},
    services::booking_time_service::parse_time,
};

#[derive(Debug, Serialize)]
pub struct TimeRuleListResponse {
    pub rules: Vec<TimeRuleResponse>,
}

/// Reject rule bounds that are malformed or empty before they reach
/// storage; the evaluator assumes start < end.
fn validate_window(start: &str, end: &str) -> ApiResult<(String, String)> {
    let start = parse_time(start)?;
    let end = parse_time(end)?;

    if start >= end {
        return Err(ApiError::BadRequest(
            "start_time must be before end_time".to_string(),
        ));
    }

    Ok((start, end))
}

/// List all time rules across day types
/// GET /api/admin/time-rules
pub async fn list_time_rules(
    State(state): State<AppState>,
) -> ApiResult<Json<TimeRuleListResponse>> {
    let rules = state.db.list_time_rules().await?;

    Ok(Json(TimeRuleListResponse {
        rules: rules.into_iter().map(TimeRuleResponse::from).collect(),
    }))
}

/// Create a time rule
/// POST /api/admin/time-rules
pub async fn create_time_rule(
    State(state): State<AppState>,
    Json(req): Json<CreateTimeRuleRequest>,
) -> ApiResult<(StatusCode, Json<TimeRuleResponse>)> {
    let (start, end) = validate_window(&req.start_time, &req.end_time)?;

    let rule = TimeRule::new(req.day_type, req.name, start, end, req.is_blocked);
    state.db.create_time_rule(&rule).await?;

    Ok((StatusCode::CREATED, Json(TimeRuleResponse::from(rule))))
}

/// Update a time rule's window or blocked flag
/// PUT /api/admin/time-rules/:id
pub async fn update_time_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTimeRuleRequest>,
) -> ApiResult<Json<TimeRuleResponse>> {
    let current = state
        .db
        .get_time_rule(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Time rule not found: {}", id)))?;

    let start = req.start_time.as_deref().unwrap_or(&current.start_time);
    let end = req.end_time.as_deref().unwrap_or(&current.end_time);
    let is_blocked = req.is_blocked.unwrap_or(current.is_blocked);

    let (start, end) = validate_window(start, end)?;

    state.db.update_time_rule(&id, &start, &end, is_blocked).await?;

    let updated = state
        .db
        .get_time_rule(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Time rule not found: {}", id)))?;

    Ok(Json(TimeRuleResponse::from(updated)))
}

/// Delete a time rule
/// DELETE /api/admin/time-rules/:id
pub async fn delete_time_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.db.delete_time_rule(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
