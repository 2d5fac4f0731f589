//! # Nimbus Repository
//!
//! Persistence for manually entered forecast overrides:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ForecastOverrideRepository>   (domain interface)
//! MySqlForecastOverrideRepository            (MySQL / SQLx)
//!   ↓
//! MySQL (unique index on (city, date))
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use nimbus_core::{ForecastOverride, NimbusResult};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory repository exercising the trait's upsert contract.
    struct InMemoryOverrideRepository {
        records: Mutex<HashMap<(String, NaiveDate), ForecastOverride>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryOverrideRepository {
        fn new() -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl ForecastOverrideRepository for InMemoryOverrideRepository {
        async fn find_by_city_and_date(
            &self,
            city: &str,
            date: NaiveDate,
        ) -> NimbusResult<Option<ForecastOverride>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .get(&(city.to_string(), date))
                .cloned())
        }

        async fn upsert(
            &self,
            city: &str,
            date: NaiveDate,
            min_temperature: f64,
            max_temperature: f64,
        ) -> NimbusResult<ForecastOverride> {
            let mut records = self.records.lock().unwrap();
            let key = (city.to_string(), date);
            let now = Utc::now();

            let record = match records.get(&key) {
                Some(existing) => ForecastOverride {
                    min_temperature,
                    max_temperature,
                    updated_at: now,
                    ..existing.clone()
                },
                None => {
                    let mut next_id = self.next_id.lock().unwrap();
                    let id = *next_id;
                    *next_id += 1;
                    ForecastOverride {
                        id,
                        city: city.to_string(),
                        date,
                        min_temperature,
                        max_temperature,
                        created_at: now,
                        updated_at: now,
                    }
                }
            };

            records.insert(key, record.clone());
            Ok(record)
        }

        async fn count(&self) -> NimbusResult<u64> {
            Ok(self.records.lock().unwrap().len() as u64)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_upsert_inserts_new_record() {
        let repo = InMemoryOverrideRepository::new();

        let record = repo.upsert("moscow", date(2025, 1, 5), -2.0, 4.0).await.unwrap();
        assert_eq!(record.city, "moscow");
        assert_eq!(record.min_temperature, -2.0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_record() {
        let repo = InMemoryOverrideRepository::new();

        let first = repo.upsert("moscow", date(2025, 1, 5), -2.0, 4.0).await.unwrap();
        let second = repo.upsert("moscow", date(2025, 1, 5), -5.0, 1.0).await.unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.min_temperature, -5.0);
        assert_eq!(second.max_temperature, 1.0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_different_dates_are_distinct_records() {
        let repo = InMemoryOverrideRepository::new();

        repo.upsert("moscow", date(2025, 1, 5), -2.0, 4.0).await.unwrap();
        repo.upsert("moscow", date(2025, 1, 6), -3.0, 2.0).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = InMemoryOverrideRepository::new();
        let found = repo
            .find_by_city_and_date("nowhere", date(2025, 1, 5))
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
