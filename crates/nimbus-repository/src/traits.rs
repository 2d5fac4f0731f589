//! Repository trait definitions.

use async_trait::async_trait;
use chrono::NaiveDate;
use nimbus_core::{ForecastOverride, Interface, NimbusResult};

/// Forecast override repository.
///
/// The store enforces uniqueness on `(city, date)` at the storage layer,
/// independent of the upsert logic, as a defense against concurrent writers.
/// Callers are expected to pass cities already normalized to lowercase.
#[async_trait]
pub trait ForecastOverrideRepository: Interface + Send + Sync {
    /// Finds the override for a city on a specific date.
    async fn find_by_city_and_date(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> NimbusResult<Option<ForecastOverride>>;

    /// Inserts a new override or updates the temperatures of an existing one.
    ///
    /// Returns the persisted record, with creation metadata preserved when
    /// the record already existed.
    async fn upsert(
        &self,
        city: &str,
        date: NaiveDate,
        min_temperature: f64,
        max_temperature: f64,
    ) -> NimbusResult<ForecastOverride>;

    /// Counts all stored overrides.
    async fn count(&self) -> NimbusResult<u64>;
}
