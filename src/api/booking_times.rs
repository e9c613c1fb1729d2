use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::middleware::{ApiResult, AppState},
    models::{DayType, TimeRule},
};

// ========================================
// Request/Response Types
// ========================================

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: String, // YYYY-MM-DD
}

#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub day_type: DayType,
    pub slots: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub date: String,
    pub day_type: DayType,
    pub rules: Vec<TimeRuleResponse>,
}

#[derive(Debug, Serialize)]
pub struct TimeRuleResponse {
    pub id: String,
    pub day_type: DayType,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_blocked: bool,
}

impl From<TimeRule> for TimeRuleResponse {
    fn from(rule: TimeRule) -> Self {
        Self {
            id: rule.id,
            day_type: rule.day_type,
            name: rule.name,
            start_time: rule.start_time,
            end_time: rule.end_time,
            is_blocked: rule.is_blocked,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub ok: bool,
    pub requires_approval: bool,
}

// ========================================
// Endpoints
// ========================================

/// All bookable slots for a date
/// GET /api/booking-times/slots?date=YYYY-MM-DD
pub async fn get_slots(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<SlotsResponse>> {
    let (day_type, slots) = state
        .booking_time_service
        .available_slots(&query.date)
        .await?;

    Ok(Json(SlotsResponse {
        date: query.date,
        day_type,
        slots,
    }))
}

/// The time rules that apply to a date
/// GET /api/booking-times/rules?date=YYYY-MM-DD
pub async fn get_rules(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<RulesResponse>> {
    let (day_type, rules) = state.booking_time_service.rules_for_date(&query.date).await?;

    Ok(Json(RulesResponse {
        date: query.date,
        day_type,
        rules: rules.into_iter().map(TimeRuleResponse::from).collect(),
    }))
}

/// Validate a candidate (date, time) pair without reserving anything
/// POST /api/booking-times/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> ApiResult<Json<ValidateResponse>> {
    let outcome = state
        .booking_time_service
        .validate_candidate(&req.date, &req.time)
        .await?;

    Ok(Json(ValidateResponse {
        ok: true,
        requires_approval: outcome.requires_approval,
    }))
}
