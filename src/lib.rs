pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;

pub use error::{BookingError, BookingResult};
