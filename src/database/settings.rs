use crate::database::Database;
use crate::error::BookingResult;
use crate::models::{
    BookingSettings, SETTING_GRANULARITY, SETTING_HOLIDAY_CACHE_DAYS, SETTING_HOLIDAY_STATE,
    SETTING_MORNING_APPROVAL, SETTING_USE_HOLIDAY_API,
};
use sqlx::Row;

impl Database {
    pub async fn get_setting(&self, key: &str) -> BookingResult<Option<String>> {
        let row = sqlx::query("SELECT value FROM system_settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(row) = row {
            Ok(Some(row.try_get("value")?))
        } else {
            Ok(None)
        }
    }

    pub async fn set_setting(&self, key: &str, value: &str) -> BookingResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO system_settings (key, value, updated_at)
             VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Materialize the typed booking settings, falling back to the
    /// documented default for every absent or unparseable key.
    pub async fn load_booking_settings(&self) -> BookingResult<BookingSettings> {
        let defaults = BookingSettings::default();

        let granularity_minutes = self
            .get_setting(SETTING_GRANULARITY)
            .await?
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|g| *g > 0)
            .unwrap_or(defaults.granularity_minutes);

        let morning_walk_requires_approval = self
            .get_setting(SETTING_MORNING_APPROVAL)
            .await?
            .map(|v| v == "true")
            .unwrap_or(defaults.morning_walk_requires_approval);

        let use_holiday_api = self
            .get_setting(SETTING_USE_HOLIDAY_API)
            .await?
            .map(|v| v == "true")
            .unwrap_or(defaults.use_holiday_api);

        let state = self
            .get_setting(SETTING_HOLIDAY_STATE)
            .await?
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.state);

        let cache_days = self
            .get_setting(SETTING_HOLIDAY_CACHE_DAYS)
            .await?
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|d| *d > 0)
            .unwrap_or(defaults.cache_days);

        Ok(BookingSettings {
            granularity_minutes,
            morning_walk_requires_approval,
            use_holiday_api,
            state,
            cache_days,
        })
    }
}
