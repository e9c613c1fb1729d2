mod helpers;

use helpers::*;

#[tokio::test]
async fn settings_materialize_with_documented_defaults() {
    let db = setup_test_db().await;

    // Drop the seeded rows so every key falls back
    sqlx::query("DELETE FROM system_settings")
        .execute(db.pool())
        .await
        .unwrap();

    let settings = db.load_booking_settings().await.unwrap();
    assert_eq!(settings.granularity_minutes, 15);
    assert!(!settings.morning_walk_requires_approval);
    assert!(!settings.use_holiday_api);
    assert_eq!(settings.state, "BW");
    assert_eq!(settings.cache_days, 7);
}

#[tokio::test]
async fn stored_values_override_defaults() {
    let db = setup_test_db().await;

    db.set_setting("booking_time_granularity", "20").await.unwrap();
    db.set_setting("morning_walk_requires_approval", "true")
        .await
        .unwrap();
    db.set_setting("holiday_api_state", "BY").await.unwrap();

    let settings = db.load_booking_settings().await.unwrap();
    assert_eq!(settings.granularity_minutes, 20);
    assert!(settings.morning_walk_requires_approval);
    assert_eq!(settings.state, "BY");
}

#[tokio::test]
async fn invalid_values_fall_back_instead_of_failing() {
    let db = setup_test_db().await;

    db.set_setting("booking_time_granularity", "0").await.unwrap();
    db.set_setting("holiday_api_cache_days", "-3").await.unwrap();
    db.set_setting("holiday_api_state", "").await.unwrap();

    let settings = db.load_booking_settings().await.unwrap();
    assert_eq!(settings.granularity_minutes, 15);
    assert_eq!(settings.cache_days, 7);
    assert_eq!(settings.state, "BW");
}

#[tokio::test]
async fn writes_upsert_the_same_key() {
    let db = setup_test_db().await;

    db.set_setting("booking_time_granularity", "20").await.unwrap();
    db.set_setting("booking_time_granularity", "30").await.unwrap();

    let value = db
        .get_setting("booking_time_granularity")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(value, "30");
}
