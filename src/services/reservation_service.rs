use crate::database::Database;
use crate::error::{BookingError, BookingResult};
use crate::models::{ApprovalStatus, Booking, BookingStatus, CreateBookingRequest};
use crate::services::BookingTimeService;
use tracing::info;

/// Commits reservations once a candidate slot has passed validation.
///
/// Validation and commit are not atomic; the partial unique index on
/// scheduled bookings is the authoritative guard, and a lost race
/// surfaces as `SlotAlreadyReserved` from the insert itself.
#[derive(Clone)]
pub struct ReservationService {
    db: Database,
    booking_time_service: BookingTimeService,
}

impl ReservationService {
    pub fn new(db: Database, booking_time_service: BookingTimeService) -> Self {
        Self {
            db,
            booking_time_service,
        }
    }

    /// Reserve a walk slot for a dog.
    ///
    /// Checks run from cheapest to most specific: time-rule validation,
    /// then the global block list, then the per-dog block list, then
    /// the insert that settles any remaining race.
    pub async fn reserve(&self, request: &CreateBookingRequest) -> BookingResult<Booking> {
        let outcome = self
            .booking_time_service
            .validate_candidate(&request.date, &request.scheduled_time)
            .await?;

        if let Some(block) = self.db.find_global_block(&request.date).await? {
            return Err(BookingError::DateGloballyBlocked {
                reason: block.reason,
            });
        }

        if let Some(block) = self
            .db
            .find_dog_block(&request.date, &request.dog_id)
            .await?
        {
            return Err(BookingError::DateBlockedForAnimal {
                reason: block.reason,
            });
        }

        // Friendly pre-check; the partial unique index still settles any
        // race that slips past it.
        if self
            .db
            .find_scheduled_booking(&request.dog_id, &request.date, request.walk_type)
            .await?
            .is_some()
        {
            return Err(BookingError::SlotAlreadyReserved);
        }

        let booking = Booking::new(
            request.dog_id.clone(),
            request.date.clone(),
            request.walk_type,
            request.scheduled_time.clone(),
            outcome.requires_approval,
        );

        self.db.insert_booking(&booking).await?;

        info!(
            booking_id = %booking.id,
            dog_id = %booking.dog_id,
            date = %booking.date,
            walk_type = booking.walk_type.as_str(),
            requires_approval = booking.requires_approval,
            "booking reserved"
        );

        Ok(booking)
    }

    /// Cancel a booking. The row stays for history; only `scheduled`
    /// rows hold a slot, so the slot frees up immediately.
    pub async fn cancel(&self, booking_id: &str) -> BookingResult<Booking> {
        self.transition(booking_id, BookingStatus::Cancelled).await
    }

    /// Mark a booking's walk as done.
    pub async fn complete(&self, booking_id: &str) -> BookingResult<Booking> {
        self.transition(booking_id, BookingStatus::Completed).await
    }

    /// Resolve a pending approval either way.
    pub async fn set_approval(
        &self,
        booking_id: &str,
        approval_status: ApprovalStatus,
    ) -> BookingResult<Booking> {
        self.db
            .update_approval_status(booking_id, approval_status)
            .await?;

        info!(booking_id, approval_status = approval_status.as_str(), "approval updated");

        self.db
            .get_booking(booking_id)
            .await?
            .ok_or(BookingError::NotFound { entity: "booking" })
    }

    async fn transition(&self, booking_id: &str, status: BookingStatus) -> BookingResult<Booking> {
        self.db.update_booking_status(booking_id, status).await?;

        info!(booking_id, status = status.as_str(), "booking status updated");

        self.db
            .get_booking(booking_id)
            .await?
            .ok_or(BookingError::NotFound { entity: "booking" })
    }
}
