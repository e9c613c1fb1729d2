use crate::error::BookingError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    UnprocessableEntity(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::UnprocessableEntity(msg) => write!(f, "Unprocessable: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// Map domain failures onto HTTP statuses. Caller-input problems are 4xx;
// only storage and provider errors surface as 500.
impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match &err {
            BookingError::InvalidDateFormat
            | BookingError::InvalidTimeFormat
            | BookingError::OutsideAllowedWindow
            | BookingError::InBlockedWindow { .. } => ApiError::BadRequest(err.to_string()),

            BookingError::DateGloballyBlocked { .. }
            | BookingError::DateBlockedForAnimal { .. } => {
                ApiError::UnprocessableEntity(err.to_string())
            }

            BookingError::SlotAlreadyReserved | BookingError::DateAlreadyBlocked => {
                ApiError::Conflict(err.to_string())
            }

            BookingError::NotFound { .. } => ApiError::NotFound(err.to_string()),

            BookingError::ExternalProviderUnavailable(_) | BookingError::Database(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::from(BookingError::from(err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
