use crate::database::Database;
use crate::error::{BookingError, BookingResult};
use crate::models::{DayType, TimeRule};
use sqlx::Row;
use std::str::FromStr;

impl Database {
    /// All rules for one day type, ordered by start time ascending.
    pub async fn rules_for_day_type(&self, day_type: DayType) -> BookingResult<Vec<TimeRule>> {
        let rows = sqlx::query(
            "SELECT id, day_type, name, start_time, end_time, is_blocked, created_at, updated_at
             FROM booking_time_rules
             WHERE day_type = ?
             ORDER BY start_time ASC",
        )
        .bind(day_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_time_rule).collect()
    }

    /// All rules across day types, ordered by day type then start time.
    pub async fn list_time_rules(&self) -> BookingResult<Vec<TimeRule>> {
        let rows = sqlx::query(
            "SELECT id, day_type, name, start_time, end_time, is_blocked, created_at, updated_at
             FROM booking_time_rules
             ORDER BY day_type, start_time ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_time_rule).collect()
    }

    pub async fn get_time_rule(&self, id: &str) -> BookingResult<Option<TimeRule>> {
        let row = sqlx::query(
            "SELECT id, day_type, name, start_time, end_time, is_blocked, created_at, updated_at
             FROM booking_time_rules
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_time_rule).transpose()
    }

    pub async fn create_time_rule(&self, rule: &TimeRule) -> BookingResult<()> {
        sqlx::query(
            "INSERT INTO booking_time_rules (id, day_type, name, start_time, end_time, is_blocked, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&rule.id)
        .bind(rule.day_type.as_str())
        .bind(&rule.name)
        .bind(&rule.start_time)
        .bind(&rule.end_time)
        .bind(rule.is_blocked as i32)
        .bind(&rule.created_at)
        .bind(&rule.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update_time_rule(
        &self,
        id: &str,
        start_time: &str,
        end_time: &str,
        is_blocked: bool,
    ) -> BookingResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE booking_time_rules
             SET start_time = ?, end_time = ?, is_blocked = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(start_time)
        .bind(end_time)
        .bind(is_blocked as i32)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound { entity: "time rule" });
        }
        Ok(())
    }

    pub async fn delete_time_rule(&self, id: &str) -> BookingResult<()> {
        sqlx::query("DELETE FROM booking_time_rules WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_time_rule(row: &sqlx::any::AnyRow) -> BookingResult<TimeRule> {
    let day_type_str: String = row.try_get("day_type")?;
    Ok(TimeRule {
        id: row.try_get("id")?,
        day_type: DayType::from_str(&day_type_str)
            .map_err(|_| sqlx::Error::Decode(format!("bad day_type: {}", day_type_str).into()))?,
        name: row.try_get("name")?,
        start_time: row.try_get("start_time")?,
        end_time: row.try_get("end_time")?,
        // Flags are stored as SQLite integers; the Any driver has no bool
        is_blocked: row.try_get::<i32, _>("is_blocked")? != 0,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
