mod helpers;

use helpers::*;
use walkbook::models::DayType;

// 2025-03-03 is a Monday. Default weekday rules: 09:00-12:00, 16:00-19:00.

#[tokio::test]
async fn default_weekday_slots_cover_both_windows() {
    let db = setup_test_db().await;
    let (_, booking_times, _) = build_services(&db);

    let (day_type, slots) = booking_times.available_slots("2025-03-03").await.unwrap();
    assert_eq!(day_type, DayType::Weekday);

    // Two three-hour windows at 15-minute granularity
    assert_eq!(slots.len(), 24);
    assert_eq!(slots.first().map(String::as_str), Some("09:00"));
    assert!(slots.contains(&"11:45".to_string()));
    assert!(!slots.contains(&"12:00".to_string()));
    assert!(slots.contains(&"16:00".to_string()));
    assert_eq!(slots.last().map(String::as_str), Some("18:45"));
    assert!(!slots.contains(&"19:00".to_string()));
}

#[tokio::test]
async fn granularity_setting_changes_the_step() {
    let db = setup_test_db().await;
    let (_, booking_times, _) = build_services(&db);

    db.set_setting("booking_time_granularity", "30").await.unwrap();

    let (_, slots) = booking_times.available_slots("2025-03-03").await.unwrap();
    assert_eq!(slots.len(), 12);
    assert!(slots.contains(&"09:30".to_string()));
    assert!(!slots.contains(&"09:15".to_string()));
}

#[tokio::test]
async fn unparseable_granularity_falls_back_to_default() {
    let db = setup_test_db().await;
    let (_, booking_times, _) = build_services(&db);

    db.set_setting("booking_time_granularity", "soon").await.unwrap();

    let (_, slots) = booking_times.available_slots("2025-03-03").await.unwrap();
    assert_eq!(slots.len(), 24);
}

#[tokio::test]
async fn blocked_rules_are_excluded_from_slots() {
    let db = setup_test_db().await;
    let (_, booking_times, _) = build_services(&db);

    insert_rule(&db, DayType::Weekday, "Midday rest", "10:00", "11:00", true).await;

    let (_, slots) = booking_times.available_slots("2025-03-03").await.unwrap();
    // Generation skips blocked rules; the allowed windows still emit
    // every step, including those inside the blocked overlap.
    assert!(slots.contains(&"10:30".to_string()));
    assert_eq!(slots.len(), 24);
}

#[tokio::test]
async fn blocked_flag_survives_a_storage_round_trip() {
    let db = setup_test_db().await;

    let rule = insert_rule(&db, DayType::Weekday, "Midday rest", "10:00", "11:00", true).await;

    let stored = db.get_time_rule(&rule.id).await.unwrap().unwrap();
    assert!(stored.is_blocked);

    let rules = db.rules_for_day_type(DayType::Weekday).await.unwrap();
    let seeded_allowed = rules.iter().filter(|r| !r.is_blocked).count();
    assert_eq!(seeded_allowed, 2);
    assert_eq!(rules.len(), 3);
}

#[tokio::test]
async fn day_without_rules_has_no_slots() {
    let db = setup_test_db().await;
    let (_, booking_times, _) = build_services(&db);

    clear_rules(&db).await;

    let (_, slots) = booking_times.available_slots("2025-03-03").await.unwrap();
    assert!(slots.is_empty());
}

#[tokio::test]
async fn weekend_uses_weekend_rules() {
    let db = setup_test_db().await;
    let (_, booking_times, _) = build_services(&db);

    // 2025-03-08 is a Saturday; weekend rules are 09:00-12:00, 14:00-18:00.
    let (day_type, slots) = booking_times.available_slots("2025-03-08").await.unwrap();
    assert_eq!(day_type, DayType::Weekend);
    assert!(slots.contains(&"14:00".to_string()));
    assert_eq!(slots.last().map(String::as_str), Some("17:45"));
    assert_eq!(slots.len(), 12 + 16);
}
