use serde::{Deserialize, Serialize};

/// Where a holiday entry came from. Provider-sourced rows may be
/// re-inserted idempotently on every cache refresh; admin rows are never
/// touched by that process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidaySource {
    Api,
    Admin,
}

impl HolidaySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidaySource::Api => "api",
            HolidaySource::Admin => "admin",
        }
    }
}

/// A public holiday on a specific calendar date. Deactivated rather than
/// deleted when possible, so `is_holiday` flips without losing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub date: String, // YYYY-MM-DD
    pub name: String,
    pub is_active: bool,
    pub source: HolidaySource,
    pub created_by: Option<String>,
    pub created_at: String,
}

impl Holiday {
    pub fn new(date: String, name: String, source: HolidaySource) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            name,
            is_active: true,
            source,
            created_by: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// One cached raw provider response per (year, state).
#[derive(Debug, Clone)]
pub struct HolidayCacheEntry {
    pub id: String,
    pub year: i32,
    pub state: String,
    pub payload: String,
    pub fetched_at: String,
    pub expires_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateHolidayRequest {
    pub date: String, // YYYY-MM-DD
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateHolidayRequest {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

/// Wire format of the external holiday provider: a JSON map of
/// holiday name to this entry.
#[derive(Debug, Deserialize)]
pub struct ProviderHoliday {
    pub datum: String, // YYYY-MM-DD
    #[serde(default)]
    pub hinweis: String,
}
