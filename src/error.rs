/// Typed failure modes of the booking engine. None of these is fatal;
/// all are returned to the caller as results.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("invalid date format, expected YYYY-MM-DD")]
    InvalidDateFormat,

    #[error("invalid time format, expected HH:MM")]
    InvalidTimeFormat,

    #[error("time is outside the allowed booking windows")]
    OutsideAllowedWindow,

    #[error("time falls within blocked window '{rule}' ({start}-{end})")]
    InBlockedWindow {
        rule: String,
        start: String,
        end: String,
    },

    #[error("date is blocked for all dogs: {reason}")]
    DateGloballyBlocked { reason: String },

    #[error("date is blocked for this dog: {reason}")]
    DateBlockedForAnimal { reason: String },

    /// The only error expected from a race rather than caller input:
    /// another request committed the identical (dog, date, walk type)
    /// slot first.
    #[error("this slot has just been taken")]
    SlotAlreadyReserved,

    /// A duplicate blocked-date entry for the same (date, dog) pair.
    #[error("this date is already blocked")]
    DateAlreadyBlocked,

    /// Provider fetch failed. Absorbed by the holiday resolver (logged,
    /// never surfaced to booking callers), per the soft-fail contract.
    #[error("holiday provider unavailable: {0}")]
    ExternalProviderUnavailable(String),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type BookingResult<T> = Result<T, BookingError>;

impl BookingError {
    /// Translate a storage-layer failure on insert into the domain
    /// conflict it represents, keeping other errors intact.
    pub fn map_unique_violation(err: sqlx::Error, conflict: BookingError) -> BookingError {
        match &err {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message();
                if message.contains("UNIQUE") || message.contains("unique") {
                    conflict
                } else {
                    BookingError::Database(err)
                }
            }
            _ => BookingError::Database(err),
        }
    }
}
