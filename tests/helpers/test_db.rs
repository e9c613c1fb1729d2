use walkbook::database::Database;
use walkbook::models::{DayType, TimeRule};
use walkbook::services::{BookingTimeService, HolidayService, ReservationService};

/// Unroutable provider endpoint; tests that enable the holiday API
/// exercise the soft-fail path unless they pre-seed the cache.
pub const DEAD_PROVIDER_URL: &str = "http://127.0.0.1:9";

pub fn build_services(db: &Database) -> (HolidayService, BookingTimeService, ReservationService) {
    let holiday_service = HolidayService::new(db.clone(), DEAD_PROVIDER_URL.to_string(), 1);
    let booking_time_service = BookingTimeService::new(db.clone(), holiday_service.clone());
    let reservation_service = ReservationService::new(db.clone(), booking_time_service.clone());
    (holiday_service, booking_time_service, reservation_service)
}

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    use uuid::Uuid;
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    setup_schema(&db).await;
    seed_test_data(&db).await;

    db
}

async fn setup_schema(db: &Database) {
    let pool = db.pool();

    sqlx::query(
        "CREATE TABLE booking_time_rules (
            id TEXT PRIMARY KEY,
            day_type TEXT NOT NULL CHECK(day_type IN ('weekday', 'weekend', 'holiday')),
            name TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL,
            is_blocked INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(day_type, name)
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create booking_time_rules table");

    sqlx::query(
        "CREATE TABLE holidays (
            id TEXT PRIMARY KEY,
            date TEXT NOT NULL,
            name TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            source TEXT NOT NULL CHECK(source IN ('api', 'admin')),
            created_by TEXT,
            created_at TEXT NOT NULL,
            UNIQUE(date, name, source)
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create holidays table");

    sqlx::query(
        "CREATE TABLE holiday_api_cache (
            id TEXT PRIMARY KEY,
            year INTEGER NOT NULL,
            state TEXT NOT NULL,
            payload TEXT NOT NULL,
            fetched_at TEXT NOT NULL,
            expires_at TEXT NOT NULL,
            UNIQUE(year, state)
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create holiday_api_cache table");

    sqlx::query(
        "CREATE TABLE blocked_dates (
            id TEXT PRIMARY KEY,
            date TEXT NOT NULL,
            dog_id TEXT,
            reason TEXT NOT NULL,
            created_by TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create blocked_dates table");

    sqlx::query(
        "CREATE UNIQUE INDEX idx_blocked_dates_dog_date
         ON blocked_dates(COALESCE(dog_id, ''), date)",
    )
    .execute(pool)
    .await
    .expect("Failed to create blocked_dates index");

    sqlx::query(
        "CREATE TABLE bookings (
            id TEXT PRIMARY KEY,
            dog_id TEXT NOT NULL,
            date TEXT NOT NULL,
            walk_type TEXT NOT NULL CHECK(walk_type IN ('morning', 'evening')),
            scheduled_time TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'scheduled' CHECK(status IN ('scheduled', 'completed', 'cancelled')),
            requires_approval INTEGER NOT NULL DEFAULT 0,
            approval_status TEXT NOT NULL DEFAULT 'approved' CHECK(approval_status IN ('pending', 'approved', 'rejected')),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create bookings table");

    sqlx::query(
        "CREATE UNIQUE INDEX idx_bookings_scheduled_slot
         ON bookings(dog_id, date, walk_type) WHERE status = 'scheduled'",
    )
    .execute(pool)
    .await
    .expect("Failed to create bookings partial index");

    sqlx::query(
        "CREATE TABLE system_settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create system_settings table");
}

async fn seed_test_data(db: &Database) {
    // Same defaults the production migration installs
    let defaults = [
        (DayType::Weekday, "Morning walks", "09:00", "12:00"),
        (DayType::Weekday, "Evening walks", "16:00", "19:00"),
        (DayType::Weekend, "Morning walks", "09:00", "12:00"),
        (DayType::Weekend, "Afternoon walks", "14:00", "18:00"),
        (DayType::Holiday, "Morning walks", "09:00", "12:00"),
        (DayType::Holiday, "Afternoon walks", "14:00", "18:00"),
    ];

    for (day_type, name, start, end) in defaults {
        let rule = TimeRule::new(
            day_type,
            name.to_string(),
            start.to_string(),
            end.to_string(),
            false,
        );
        db.create_time_rule(&rule)
            .await
            .expect("Failed to seed time rule");
    }

    let settings = [
        ("booking_time_granularity", "15"),
        ("morning_walk_requires_approval", "false"),
        ("use_holiday_api", "false"),
        ("holiday_api_state", "BW"),
        ("holiday_api_cache_days", "7"),
    ];

    for (key, value) in settings {
        db.set_setting(key, value)
            .await
            .expect("Failed to seed setting");
    }
}

/// Insert a rule directly, bypassing the admin API validation.
pub async fn insert_rule(db: &Database, day_type: DayType, name: &str, start: &str, end: &str, blocked: bool) -> TimeRule {
    let rule = TimeRule::new(
        day_type,
        name.to_string(),
        start.to_string(),
        end.to_string(),
        blocked,
    );
    db.create_time_rule(&rule)
        .await
        .expect("Failed to insert rule");
    rule
}

/// Remove every seeded rule so a test can build its own rule table.
pub async fn clear_rules(db: &Database) {
    sqlx::query("DELETE FROM booking_time_rules")
        .execute(db.pool())
        .await
        .expect("Failed to clear rules");
}
