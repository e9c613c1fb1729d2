mod helpers;

use helpers::*;
use walkbook::models::{Holiday, HolidaySource};

#[tokio::test]
async fn admin_holiday_is_visible_immediately() {
    let db = setup_test_db().await;
    let (holidays, _, _) = build_services(&db);

    assert!(!holidays.is_holiday("2025-12-25").await.unwrap());

    let holiday = Holiday::new(
        "2025-12-25".to_string(),
        "Christmas".to_string(),
        HolidaySource::Admin,
    );
    db.create_holiday(&holiday).await.unwrap();

    assert!(holidays.is_holiday("2025-12-25").await.unwrap());

    let year = holidays.holidays_for_year(2025).await.unwrap();
    assert_eq!(year.len(), 1);
    assert_eq!(year[0].name, "Christmas");
}

#[tokio::test]
async fn deactivation_toggles_without_deleting() {
    let db = setup_test_db().await;
    let (holidays, _, _) = build_services(&db);

    let holiday = Holiday::new(
        "2025-12-25".to_string(),
        "Christmas".to_string(),
        HolidaySource::Admin,
    );
    db.create_holiday(&holiday).await.unwrap();

    db.update_holiday(&holiday.id, None, Some(false))
        .await
        .unwrap();
    assert!(!holidays.is_holiday("2025-12-25").await.unwrap());

    // The row survives and can be turned back on
    db.update_holiday(&holiday.id, None, Some(true))
        .await
        .unwrap();
    assert!(holidays.is_holiday("2025-12-25").await.unwrap());
}

#[tokio::test]
async fn api_upsert_is_idempotent_and_leaves_admin_rows_alone() {
    let db = setup_test_db().await;

    db.upsert_api_holiday("2025-12-25", "1. Weihnachtstag")
        .await
        .unwrap();
    db.upsert_api_holiday("2025-12-25", "1. Weihnachtstag")
        .await
        .unwrap();

    let year = db.holidays_by_year(2025).await.unwrap();
    assert_eq!(year.len(), 1);

    // An admin entry on the same date coexists with the provider entry
    let admin = Holiday::new(
        "2025-12-25".to_string(),
        "Christmas".to_string(),
        HolidaySource::Admin,
    );
    db.create_holiday(&admin).await.unwrap();

    db.upsert_api_holiday("2025-12-25", "1. Weihnachtstag")
        .await
        .unwrap();

    let year = db.holidays_by_year(2025).await.unwrap();
    assert_eq!(year.len(), 2);
}

#[tokio::test]
async fn cached_payload_populates_holidays_without_network() {
    let db = setup_test_db().await;
    let (holidays, _, _) = build_services(&db);

    db.set_setting("use_holiday_api", "true").await.unwrap();

    let payload = r#"{"1. Weihnachtstag": {"datum": "2025-12-25", "hinweis": ""},
                     "2. Weihnachtstag": {"datum": "2025-12-26", "hinweis": ""}}"#;
    db.set_cached_holiday_payload(2025, "BW", payload, 7)
        .await
        .unwrap();

    // Provider endpoint is unroutable; only the cache can answer
    assert!(holidays.is_holiday("2025-12-25").await.unwrap());
    assert!(holidays.is_holiday("2025-12-26").await.unwrap());
    assert!(!holidays.is_holiday("2025-12-24").await.unwrap());
}

#[tokio::test]
async fn expired_cache_rows_read_as_misses_but_are_kept() {
    let db = setup_test_db().await;

    let payload = r#"{"Neujahr": {"datum": "2025-01-01", "hinweis": ""}}"#;
    db.set_cached_holiday_payload(2025, "BW", payload, -1)
        .await
        .unwrap();

    assert!(db
        .get_cached_holiday_payload(2025, "BW")
        .await
        .unwrap()
        .is_none());
    assert!(db.get_cache_entry(2025, "BW").await.unwrap().is_some());
}

#[tokio::test]
async fn refreshing_replaces_the_cache_row_for_the_same_year_and_state() {
    let db = setup_test_db().await;

    db.set_cached_holiday_payload(2025, "BW", "{}", 7)
        .await
        .unwrap();
    db.set_cached_holiday_payload(2025, "BW", r#"{"Neujahr": {"datum": "2025-01-01"}}"#, 7)
        .await
        .unwrap();

    let payload = db
        .get_cached_holiday_payload(2025, "BW")
        .await
        .unwrap()
        .unwrap();
    assert!(payload.contains("Neujahr"));

    // A different state keeps its own row
    db.set_cached_holiday_payload(2025, "BY", "{}", 7)
        .await
        .unwrap();
    assert!(db.get_cache_entry(2025, "BY").await.unwrap().is_some());
    assert!(db.get_cache_entry(2025, "BW").await.unwrap().is_some());
}

#[tokio::test]
async fn unreachable_provider_degrades_to_local_data() {
    let db = setup_test_db().await;
    let (holidays, _, _) = build_services(&db);

    db.set_setting("use_holiday_api", "true").await.unwrap();

    let admin = Holiday::new(
        "2025-12-25".to_string(),
        "Christmas".to_string(),
        HolidaySource::Admin,
    );
    db.create_holiday(&admin).await.unwrap();

    // No cache row, fetch fails, locally known holidays still answer
    assert!(holidays.is_holiday("2025-12-25").await.unwrap());
    assert!(!holidays.is_holiday("2025-12-24").await.unwrap());
}

#[tokio::test]
async fn malformed_cached_payload_is_skipped() {
    let db = setup_test_db().await;
    let (holidays, _, _) = build_services(&db);

    db.set_setting("use_holiday_api", "true").await.unwrap();
    db.set_cached_holiday_payload(2025, "BW", "not json", 7)
        .await
        .unwrap();

    // A corrupt payload must not fail the booking path
    assert!(!holidays.is_holiday("2025-12-25").await.unwrap());
}
