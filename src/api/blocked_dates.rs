use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::{
    api::middleware::{ApiResult, AppState},
    models::{BlockedDate, CreateBlockedDateRequest},
    services::booking_time_service::parse_date,
};

#[derive(Debug, Serialize)]
pub struct BlockedDateResponse {
    pub id: String,
    pub date: String,
    pub dog_id: Option<String>,
    pub reason: String,
    pub created_by: String,
    pub created_at: String,
}

impl From<BlockedDate> for BlockedDateResponse {
    fn from(blocked: BlockedDate) -> Self {
        Self {
            id: blocked.id,
            date: blocked.date,
            dog_id: blocked.dog_id,
            reason: blocked.reason,
            created_by: blocked.created_by,
            created_at: blocked.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlockedDateListResponse {
    pub blocked_dates: Vec<BlockedDateResponse>,
}

/// List all blocked dates
/// GET /api/admin/blocked-dates
pub async fn list_blocked_dates(
    State(state): State<AppState>,
) -> ApiResult<Json<BlockedDateListResponse>> {
    let blocked = state.db.list_blocked_dates().await?;

    Ok(Json(BlockedDateListResponse {
        blocked_dates: blocked.into_iter().map(BlockedDateResponse::from).collect(),
    }))
}

/// Block a date, globally or for one dog
/// POST /api/admin/blocked-dates
pub async fn create_blocked_date(
    State(state): State<AppState>,
    Json(req): Json<CreateBlockedDateRequest>,
) -> ApiResult<(StatusCode, Json<BlockedDateResponse>)> {
    parse_date(&req.date)?;

    let created_by = req.created_by.unwrap_or_else(|| "admin".to_string());
    let blocked = BlockedDate::new(req.date, req.dog_id, req.reason, created_by);
    state.db.create_blocked_date(&blocked).await?;

    Ok((StatusCode::CREATED, Json(BlockedDateResponse::from(blocked))))
}

/// Remove a block
/// DELETE /api/admin/blocked-dates/:id
pub async fn delete_blocked_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.db.delete_blocked_date(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
