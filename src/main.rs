use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkbook::api::middleware::AppState;
use walkbook::api::build_router;
use walkbook::config::Config;
use walkbook::database::Database;
use walkbook::services::{BookingTimeService, HolidayService, ReservationService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walkbook=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    // Wire up services
    let holiday_service = HolidayService::new(
        db.clone(),
        config.holiday_api_base_url.clone(),
        config.holiday_api_timeout_secs,
    );
    let booking_time_service = BookingTimeService::new(db.clone(), holiday_service.clone());
    let reservation_service = ReservationService::new(db.clone(), booking_time_service.clone());

    let state = AppState {
        db,
        holiday_service,
        booking_time_service,
        reservation_service,
    };

    // Build router
    let app = build_router(state);

    // Start server
    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
