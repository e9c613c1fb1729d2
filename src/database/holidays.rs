use crate::database::Database;
use crate::error::{BookingError, BookingResult};
use crate::models::{Holiday, HolidayCacheEntry, HolidaySource};
use sqlx::Row;

impl Database {
    /// True when an active holiday row exists for this exact date.
    pub async fn is_holiday(&self, date: &str) -> BookingResult<bool> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM holidays WHERE date = ? AND is_active = 1",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count > 0)
    }

    /// Active holidays within one calendar year, ordered by date.
    pub async fn holidays_by_year(&self, year: i32) -> BookingResult<Vec<Holiday>> {
        let year_prefix = format!("{:04}-%", year);
        let rows = sqlx::query(
            "SELECT id, date, name, is_active, source, created_by, created_at
             FROM holidays
             WHERE is_active = 1 AND date LIKE ?
             ORDER BY date ASC",
        )
        .bind(&year_prefix)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_holiday).collect()
    }

    pub async fn get_holiday(&self, id: &str) -> BookingResult<Option<Holiday>> {
        let row = sqlx::query(
            "SELECT id, date, name, is_active, source, created_by, created_at
             FROM holidays
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_holiday).transpose()
    }

    pub async fn create_holiday(&self, holiday: &Holiday) -> BookingResult<()> {
        sqlx::query(
            "INSERT INTO holidays (id, date, name, is_active, source, created_by, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&holiday.id)
        .bind(&holiday.date)
        .bind(&holiday.name)
        .bind(holiday.is_active as i32)
        .bind(holiday.source.as_str())
        .bind(&holiday.created_by)
        .bind(&holiday.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a provider-sourced holiday unless the identical
    /// (date, name) pair is already present from the provider. Existing
    /// rows, including admin-entered ones on the same date, are left
    /// alone; concurrent upserts of the same year are benign.
    pub async fn upsert_api_holiday(&self, date: &str, name: &str) -> BookingResult<()> {
        sqlx::query(
            "INSERT INTO holidays (id, date, name, is_active, source, created_by, created_at)
             SELECT ?, ?, ?, 1, 'api', NULL, ?
             WHERE NOT EXISTS (
                 SELECT 1 FROM holidays WHERE date = ? AND name = ? AND source = 'api'
             )",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(date)
        .bind(name)
        .bind(chrono::Utc::now().to_rfc3339())
        .bind(date)
        .bind(name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update_holiday(
        &self,
        id: &str,
        name: Option<&str>,
        is_active: Option<bool>,
    ) -> BookingResult<()> {
        let current = self
            .get_holiday(id)
            .await?
            .ok_or(BookingError::NotFound { entity: "holiday" })?;

        let updated_name = name.unwrap_or(&current.name);
        let updated_active = is_active.unwrap_or(current.is_active);

        sqlx::query("UPDATE holidays SET name = ?, is_active = ? WHERE id = ?")
            .bind(updated_name)
            .bind(updated_active as i32)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_holiday(&self, id: &str) -> BookingResult<()> {
        sqlx::query("DELETE FROM holidays WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Non-expired cached provider payload for (year, state). Expired
    /// rows read as a miss; they are not deleted here.
    pub async fn get_cached_holiday_payload(
        &self,
        year: i32,
        state: &str,
    ) -> BookingResult<Option<String>> {
        let now = chrono::Utc::now().to_rfc3339();
        let row = sqlx::query(
            "SELECT payload FROM holiday_api_cache
             WHERE year = ? AND state = ? AND expires_at > ?",
        )
        .bind(year)
        .bind(state)
        .bind(&now)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(row.try_get("payload")?))
        } else {
            Ok(None)
        }
    }

    /// Store a raw provider response, replacing any previous entry for
    /// the same (year, state).
    pub async fn set_cached_holiday_payload(
        &self,
        year: i32,
        state: &str,
        payload: &str,
        cache_days: i64,
    ) -> BookingResult<()> {
        let now = chrono::Utc::now();
        let expires_at = (now + chrono::Duration::days(cache_days)).to_rfc3339();

        sqlx::query(
            "INSERT INTO holiday_api_cache (id, year, state, payload, fetched_at, expires_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(year, state) DO UPDATE SET
                 payload = excluded.payload,
                 fetched_at = excluded.fetched_at,
                 expires_at = excluded.expires_at",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(year)
        .bind(state)
        .bind(payload)
        .bind(now.to_rfc3339())
        .bind(&expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_cache_entry(
        &self,
        year: i32,
        state: &str,
    ) -> BookingResult<Option<HolidayCacheEntry>> {
        let row = sqlx::query(
            "SELECT id, year, state, payload, fetched_at, expires_at
             FROM holiday_api_cache
             WHERE year = ? AND state = ?",
        )
        .bind(year)
        .bind(state)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(HolidayCacheEntry {
                id: row.try_get("id")?,
                year: row.try_get::<i32, _>("year")?,
                state: row.try_get("state")?,
                payload: row.try_get("payload")?,
                fetched_at: row.try_get("fetched_at")?,
                expires_at: row.try_get("expires_at")?,
            }))
        } else {
            Ok(None)
        }
    }
}

fn map_holiday(row: &sqlx::any::AnyRow) -> BookingResult<Holiday> {
    let source_str: String = row.try_get("source")?;
    let source = match source_str.as_str() {
        "admin" => HolidaySource::Admin,
        _ => HolidaySource::Api,
    };

    Ok(Holiday {
        id: row.try_get("id")?,
        date: row.try_get("date")?,
        name: row.try_get("name")?,
        // Flags are stored as SQLite integers; the Any driver has no bool
        is_active: row.try_get::<i32, _>("is_active")? != 0,
        source,
        created_by: row.try_get("created_by").ok(),
        created_at: row.try_get("created_at")?,
    })
}
