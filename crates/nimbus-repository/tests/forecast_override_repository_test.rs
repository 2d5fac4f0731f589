//! Integration tests for MySqlForecastOverrideRepository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system; run with
//! `cargo test -p nimbus-repository -- --ignored`.

mod common;

use chrono::NaiveDate;
use common::TestDatabase;
use nimbus_repository::{ForecastOverrideRepository, MySqlForecastOverrideRepository};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_upsert_and_find() {
    let db = TestDatabase::new().await;
    let repo = MySqlForecastOverrideRepository::new(db.pool());

    let record = repo
        .upsert("moscow", date(2025, 1, 5), -2.0, 4.0)
        .await
        .unwrap();
    assert_eq!(record.city, "moscow");
    assert_eq!(record.min_temperature, -2.0);
    assert_eq!(record.max_temperature, 4.0);

    let found = repo
        .find_by_city_and_date("moscow", date(2025, 1, 5))
        .await
        .unwrap();
    assert_eq!(found, Some(record));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_upsert_twice_leaves_single_record() {
    let db = TestDatabase::new().await;
    let repo = MySqlForecastOverrideRepository::new(db.pool());

    let first = repo
        .upsert("berlin", date(2025, 3, 10), 1.0, 8.0)
        .await
        .unwrap();
    let second = repo
        .upsert("berlin", date(2025, 3, 10), 3.0, 12.0)
        .await
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.min_temperature, 3.0);
    assert_eq!(second.max_temperature, 12.0);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_missing_returns_none() {
    let db = TestDatabase::new().await;
    let repo = MySqlForecastOverrideRepository::new(db.pool());

    let found = repo
        .find_by_city_and_date("atlantis", date(2025, 1, 5))
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_distinct_dates_create_distinct_records() {
    let db = TestDatabase::new().await;
    let repo = MySqlForecastOverrideRepository::new(db.pool());

    repo.upsert("oslo", date(2025, 2, 1), -8.0, -1.0).await.unwrap();
    repo.upsert("oslo", date(2025, 2, 2), -6.0, 0.0).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}
