pub mod error;

pub use error::*;

use crate::database::Database;
use crate::services::{BookingTimeService, HolidayService, ReservationService};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub holiday_service: HolidayService,
    pub booking_time_service: BookingTimeService,
    pub reservation_service: ReservationService,
}
