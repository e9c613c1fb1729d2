use serde::Serialize;

/// Typed view of the booking-related keys in `system_settings`,
/// materialized once per request and injected into the services that
/// need it. Every key has a documented default used when absent.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSettings {
    /// Step size in minutes used to enumerate slots within a window.
    pub granularity_minutes: u32,
    /// When enabled, bookings in the fixed 09:00-12:00 window need
    /// administrative approval before they are finalized.
    pub morning_walk_requires_approval: bool,
    /// When enabled, `is_holiday` consults the external provider
    /// (through the cache) before the local lookup.
    pub use_holiday_api: bool,
    /// Region code sent to the holiday provider.
    pub state: String,
    /// Cache lifetime for raw provider payloads, in days.
    pub cache_days: i64,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            granularity_minutes: 15,
            morning_walk_requires_approval: false,
            use_holiday_api: false,
            state: "BW".to_string(),
            cache_days: 7,
        }
    }
}

pub const SETTING_GRANULARITY: &str = "booking_time_granularity";
pub const SETTING_MORNING_APPROVAL: &str = "morning_walk_requires_approval";
pub const SETTING_USE_HOLIDAY_API: &str = "use_holiday_api";
pub const SETTING_HOLIDAY_STATE: &str = "holiday_api_state";
pub const SETTING_HOLIDAY_CACHE_DAYS: &str = "holiday_api_cache_days";
