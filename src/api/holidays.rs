use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{
    api::middleware::{ApiResult, AppState},
    models::{CreateHolidayRequest, Holiday, HolidaySource, UpdateHolidayRequest},
    services::booking_time_service::parse_date,
};

// ========================================
// Request/Response Types
// ========================================

#[derive(Debug, Deserialize)]
pub struct ListHolidaysQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct HolidayResponse {
    pub id: String,
    pub date: String,
    pub name: String,
    pub is_active: bool,
    pub source: String,
}

impl From<Holiday> for HolidayResponse {
    fn from(holiday: Holiday) -> Self {
        Self {
            id: holiday.id,
            date: holiday.date,
            name: holiday.name,
            is_active: holiday.is_active,
            source: holiday.source.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HolidayListResponse {
    pub holidays: Vec<HolidayResponse>,
}

// ========================================
// Endpoints
// ========================================

/// List active holidays for a year, refreshing the provider cache when
/// the API is enabled
/// GET /api/admin/holidays?year=YYYY
pub async fn list_holidays(
    State(state): State<AppState>,
    Query(query): Query<ListHolidaysQuery>,
) -> ApiResult<Json<HolidayListResponse>> {
    let year = query.year.unwrap_or_else(|| chrono::Utc::now().year());
    let holidays = state.holiday_service.holidays_for_year(year).await?;

    Ok(Json(HolidayListResponse {
        holidays: holidays.into_iter().map(HolidayResponse::from).collect(),
    }))
}

/// Create an admin-entered holiday
/// POST /api/admin/holidays
pub async fn create_holiday(
    State(state): State<AppState>,
    Json(req): Json<CreateHolidayRequest>,
) -> ApiResult<(StatusCode, Json<HolidayResponse>)> {
    parse_date(&req.date)?;

    let holiday = Holiday::new(req.date, req.name, HolidaySource::Admin);
    state.db.create_holiday(&holiday).await?;

    Ok((StatusCode::CREATED, Json(HolidayResponse::from(holiday))))
}

/// Rename or toggle a holiday
/// PUT /api/admin/holidays/:id
pub async fn update_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateHolidayRequest>,
) -> ApiResult<Json<HolidayResponse>> {
    state
        .db
        .update_holiday(&id, req.name.as_deref(), req.is_active)
        .await?;

    let updated = state
        .db
        .get_holiday(&id)
        .await?
        .ok_or(crate::error::BookingError::NotFound { entity: "holiday" })?;

    Ok(Json(HolidayResponse::from(updated)))
}

/// Delete a holiday
/// DELETE /api/admin/holidays/:id
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.db.delete_holiday(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
