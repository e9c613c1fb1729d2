use crate::database::Database;
use crate::error::{BookingError, BookingResult};
use crate::models::BlockedDate;
use sqlx::Row;

impl Database {
    /// Insert a block; duplicates of the same (date, dog-or-global)
    /// pair are rejected by the unique index.
    pub async fn create_blocked_date(&self, blocked: &BlockedDate) -> BookingResult<()> {
        sqlx::query(
            "INSERT INTO blocked_dates (id, date, dog_id, reason, created_by, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&blocked.id)
        .bind(&blocked.date)
        .bind(&blocked.dog_id)
        .bind(&blocked.reason)
        .bind(&blocked.created_by)
        .bind(&blocked.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookingError::map_unique_violation(e, BookingError::DateAlreadyBlocked))?;

        Ok(())
    }

    pub async fn list_blocked_dates(&self) -> BookingResult<Vec<BlockedDate>> {
        let rows = sqlx::query(
            "SELECT id, date, dog_id, reason, created_by, created_at
             FROM blocked_dates
             ORDER BY date ASC, dog_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_blocked_date).collect()
    }

    /// The global block for a date, if any (dog_id IS NULL).
    pub async fn find_global_block(&self, date: &str) -> BookingResult<Option<BlockedDate>> {
        let row = sqlx::query(
            "SELECT id, date, dog_id, reason, created_by, created_at
             FROM blocked_dates
             WHERE date = ? AND dog_id IS NULL",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_blocked_date).transpose()
    }

    /// The dog-specific block for a date, if any.
    pub async fn find_dog_block(
        &self,
        date: &str,
        dog_id: &str,
    ) -> BookingResult<Option<BlockedDate>> {
        let row = sqlx::query(
            "SELECT id, date, dog_id, reason, created_by, created_at
             FROM blocked_dates
             WHERE date = ? AND dog_id = ?",
        )
        .bind(date)
        .bind(dog_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_blocked_date).transpose()
    }

    pub async fn delete_blocked_date(&self, id: &str) -> BookingResult<()> {
        sqlx::query("DELETE FROM blocked_dates WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_blocked_date(row: &sqlx::any::AnyRow) -> BookingResult<BlockedDate> {
    Ok(BlockedDate {
        id: row.try_get("id")?,
        date: row.try_get("date")?,
        dog_id: row.try_get("dog_id").ok(),
        reason: row.try_get("reason")?,
        created_by: row.try_get("created_by")?,
        created_at: row.try_get("created_at")?,
    })
}
