pub mod blocked_dates;
pub mod booking_times;
pub mod bookings;
pub mod holidays;
pub mod middleware;
pub mod settings;
pub mod time_rules;

use crate::api::middleware::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        // Read path
        .route("/api/booking-times/slots", get(booking_times::get_slots))
        .route("/api/booking-times/rules", get(booking_times::get_rules))
        .route("/api/booking-times/validate", post(booking_times::validate))
        // Booking lifecycle
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/bookings", get(bookings::list_bookings))
        .route("/api/bookings/:id", get(bookings::get_booking))
        .route("/api/bookings/:id/cancel", post(bookings::cancel_booking))
        .route(
            "/api/bookings/:id/complete",
            post(bookings::complete_booking),
        )
        .route(
            "/api/bookings/:id/approval",
            post(bookings::set_booking_approval),
        )
        // Admin: time rules
        .route("/api/admin/time-rules", get(time_rules::list_time_rules))
        .route("/api/admin/time-rules", post(time_rules::create_time_rule))
        .route(
            "/api/admin/time-rules/:id",
            put(time_rules::update_time_rule),
        )
        .route(
            "/api/admin/time-rules/:id",
            delete(time_rules::delete_time_rule),
        )
        // Admin: holidays
        .route("/api/admin/holidays", get(holidays::list_holidays))
        .route("/api/admin/holidays", post(holidays::create_holiday))
        .route("/api/admin/holidays/:id", put(holidays::update_holiday))
        .route("/api/admin/holidays/:id", delete(holidays::delete_holiday))
        // Admin: blocked dates
        .route(
            "/api/admin/blocked-dates",
            get(blocked_dates::list_blocked_dates),
        )
        .route(
            "/api/admin/blocked-dates",
            post(blocked_dates::create_blocked_date),
        )
        .route(
            "/api/admin/blocked-dates/:id",
            delete(blocked_dates::delete_blocked_date),
        )
        // Admin: settings
        .route("/api/admin/settings", get(settings::get_settings))
        .route("/api/admin/settings", put(settings::update_settings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}
