use axum::{extract::State, Json};
use serde::Deserialize;
use std::collections::HashMap;

use crate::{
    api::middleware::{ApiError, ApiResult, AppState},
    models::{
        BookingSettings, SETTING_GRANULARITY, SETTING_HOLIDAY_CACHE_DAYS, SETTING_HOLIDAY_STATE,
        SETTING_MORNING_APPROVAL, SETTING_USE_HOLIDAY_API,
    },
};

const KNOWN_KEYS: [&str; 5] = [
    SETTING_GRANULARITY,
    SETTING_MORNING_APPROVAL,
    SETTING_USE_HOLIDAY_API,
    SETTING_HOLIDAY_STATE,
    SETTING_HOLIDAY_CACHE_DAYS,
];

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(flatten)]
    pub values: HashMap<String, String>,
}

/// The effective booking settings, defaults applied
/// GET /api/admin/settings
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<BookingSettings>> {
    let settings = state.db.load_booking_settings().await?;

    Ok(Json(settings))
}

/// Write one or more setting keys
/// PUT /api/admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(req): Json<UpdateSettingsRequest>,
) -> ApiResult<Json<BookingSettings>> {
    for (key, value) in &req.values {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            return Err(ApiError::BadRequest(format!("Unknown setting: {}", key)));
        }
        state.db.set_setting(key, value).await?;
    }

    let settings = state.db.load_booking_settings().await?;
    Ok(Json(settings))
}
