pub mod booking_time_service;
pub mod holiday_service;
pub mod reservation_service;

pub use booking_time_service::*;
pub use holiday_service::*;
pub use reservation_service::*;
