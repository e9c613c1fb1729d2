use crate::models::DayType;
use serde::{Deserialize, Serialize};

/// A named booking window for one day type, either allowed or blocked.
///
/// Times are `HH:MM` strings; the window is half-open, `start_time`
/// inclusive and `end_time` exclusive. Rules for the same day type may
/// overlap; a blocked rule always wins over an allowed one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRule {
    pub id: String,
    pub day_type: DayType,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_blocked: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl TimeRule {
    pub fn new(
        day_type: DayType,
        name: String,
        start_time: String,
        end_time: String,
        is_blocked: bool,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            day_type,
            name,
            start_time,
            end_time,
            is_blocked,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTimeRuleRequest {
    pub day_type: DayType,
    pub name: String,
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
    #[serde(default)]
    pub is_blocked: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTimeRuleRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_blocked: Option<bool>,
}
