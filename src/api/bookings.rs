use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::middleware::{ApiError, ApiResult, AppState},
    models::{ApprovalStatus, Booking, CreateBookingRequest},
};

// ========================================
// Request/Response Types
// ========================================

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub dog_id: String,
    pub date: String,
    pub walk_type: String,
    pub scheduled_time: String,
    pub status: String,
    pub requires_approval: bool,
    pub approval_status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            dog_id: booking.dog_id,
            date: booking.date,
            walk_type: booking.walk_type.as_str().to_string(),
            scheduled_time: booking.scheduled_time,
            status: booking.status.as_str().to_string(),
            requires_approval: booking.requires_approval,
            approval_status: booking.approval_status.as_str().to_string(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    pub date: String, // YYYY-MM-DD
}

#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub approved: bool,
}

// ========================================
// Endpoints
// ========================================

/// Reserve a walk slot
/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingResponse>)> {
    let booking = state.reservation_service.reserve(&req).await?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

/// Get a booking by ID
/// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    let booking = state
        .db
        .get_booking(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking not found: {}", id)))?;

    Ok(Json(BookingResponse::from(booking)))
}

/// List bookings on a date
/// GET /api/bookings?date=YYYY-MM-DD
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> ApiResult<Json<BookingListResponse>> {
    let bookings = state.db.list_bookings_for_date(&query.date).await?;

    Ok(Json(BookingListResponse {
        bookings: bookings.into_iter().map(BookingResponse::from).collect(),
    }))
}

/// Cancel a booking, freeing its slot
/// POST /api/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    let booking = state.reservation_service.cancel(&id).await?;

    Ok(Json(BookingResponse::from(booking)))
}

/// Mark a booking's walk as done
/// POST /api/bookings/:id/complete
pub async fn complete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    let booking = state.reservation_service.complete(&id).await?;

    Ok(Json(BookingResponse::from(booking)))
}

/// Resolve a pending approval
/// POST /api/bookings/:id/approval
pub async fn set_booking_approval(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ApprovalRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let status = if req.approved {
        ApprovalStatus::Approved
    } else {
        ApprovalStatus::Rejected
    };

    let booking = state.reservation_service.set_approval(&id, status).await?;

    Ok(Json(BookingResponse::from(booking)))
}
