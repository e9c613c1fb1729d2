use crate::database::Database;
use crate::error::{BookingError, BookingResult};
use crate::models::{ApprovalStatus, Booking, BookingStatus, WalkType};
use sqlx::Row;
use std::str::FromStr;

impl Database {
    /// Commit a scheduled booking. The partial unique index on
    /// (dog_id, date, walk_type) WHERE status = 'scheduled' is the
    /// authoritative guard against double booking; a violation surfaces
    /// as the domain conflict, not a generic database error.
    pub async fn insert_booking(&self, booking: &Booking) -> BookingResult<()> {
        sqlx::query(
            "INSERT INTO bookings (id, dog_id, date, walk_type, scheduled_time, status,
                                   requires_approval, approval_status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&booking.id)
        .bind(&booking.dog_id)
        .bind(&booking.date)
        .bind(booking.walk_type.as_str())
        .bind(&booking.scheduled_time)
        .bind(booking.status.as_str())
        .bind(booking.requires_approval as i32)
        .bind(booking.approval_status.as_str())
        .bind(&booking.created_at)
        .bind(&booking.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookingError::map_unique_violation(e, BookingError::SlotAlreadyReserved))?;

        Ok(())
    }

    pub async fn get_booking(&self, id: &str) -> BookingResult<Option<Booking>> {
        let row = sqlx::query(
            "SELECT id, dog_id, date, walk_type, scheduled_time, status,
                    requires_approval, approval_status, created_at, updated_at
             FROM bookings
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_booking).transpose()
    }

    /// The scheduled booking occupying a slot, if any.
    pub async fn find_scheduled_booking(
        &self,
        dog_id: &str,
        date: &str,
        walk_type: WalkType,
    ) -> BookingResult<Option<Booking>> {
        let row = sqlx::query(
            "SELECT id, dog_id, date, walk_type, scheduled_time, status,
                    requires_approval, approval_status, created_at, updated_at
             FROM bookings
             WHERE dog_id = ? AND date = ? AND walk_type = ? AND status = 'scheduled'",
        )
        .bind(dog_id)
        .bind(date)
        .bind(walk_type.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_booking).transpose()
    }

    pub async fn list_bookings_for_date(&self, date: &str) -> BookingResult<Vec<Booking>> {
        let rows = sqlx::query(
            "SELECT id, dog_id, date, walk_type, scheduled_time, status,
                    requires_approval, approval_status, created_at, updated_at
             FROM bookings
             WHERE date = ?
             ORDER BY scheduled_time ASC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_booking).collect()
    }

    /// Transition a booking's lifecycle status. Cancellation and
    /// completion are transitions, never deletes, so the natural key
    /// frees up for rebooking.
    pub async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> BookingResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query("UPDATE bookings SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound { entity: "booking" });
        }
        Ok(())
    }

    pub async fn update_approval_status(
        &self,
        id: &str,
        approval_status: ApprovalStatus,
    ) -> BookingResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE bookings SET approval_status = ?, updated_at = ? WHERE id = ?",
        )
        .bind(approval_status.as_str())
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound { entity: "booking" });
        }
        Ok(())
    }
}

fn map_booking(row: &sqlx::any::AnyRow) -> BookingResult<Booking> {
    let walk_type_str: String = row.try_get("walk_type")?;
    let status_str: String = row.try_get("status")?;
    let approval_str: String = row.try_get("approval_status")?;

    Ok(Booking {
        id: row.try_get("id")?,
        dog_id: row.try_get("dog_id")?,
        date: row.try_get("date")?,
        walk_type: WalkType::from_str(&walk_type_str)
            .map_err(|_| sqlx::Error::Decode(format!("bad walk_type: {}", walk_type_str).into()))?,
        scheduled_time: row.try_get("scheduled_time")?,
        status: BookingStatus::from_str(&status_str)
            .map_err(|_| sqlx::Error::Decode(format!("bad status: {}", status_str).into()))?,
        // Flags are stored as SQLite integers; the Any driver has no bool
        requires_approval: row.try_get::<i32, _>("requires_approval")? != 0,
        approval_status: ApprovalStatus::from_str(&approval_str).map_err(|_| {
            sqlx::Error::Decode(format!("bad approval_status: {}", approval_str).into())
        })?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
