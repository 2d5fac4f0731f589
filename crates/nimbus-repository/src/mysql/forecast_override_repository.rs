//! MySQL forecast override repository implementation.

use crate::{traits::ForecastOverrideRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use nimbus_core::{ForecastOverride, NimbusError, NimbusResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL forecast override repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ForecastOverrideRepository)]
pub struct MySqlForecastOverrideRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlForecastOverrideRepository {
    /// Creates a new MySQL forecast override repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a forecast override.
#[derive(Debug, FromRow)]
struct ForecastOverrideRow {
    id: i64,
    city: String,
    date: NaiveDate,
    min_temperature: f64,
    max_temperature: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ForecastOverrideRow> for ForecastOverride {
    fn from(row: ForecastOverrideRow) -> Self {
        Self {
            id: row.id,
            city: row.city,
            date: row.date,
            min_temperature: row.min_temperature,
            max_temperature: row.max_temperature,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ForecastOverrideRepository for MySqlForecastOverrideRepository {
    async fn find_by_city_and_date(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> NimbusResult<Option<ForecastOverride>> {
        debug!("Finding forecast override for {} on {}", city, date);

        let row = sqlx::query_as::<_, ForecastOverrideRow>(
            r#"
            SELECT id, city, date, min_temperature, max_temperature,
                   created_at, updated_at
            FROM forecast_overrides
            WHERE city = ? AND date = ?
            "#,
        )
        .bind(city)
        .bind(date)
        .fetch_optional(self.pool.acquire()?)
        .await?;

        Ok(row.map(ForecastOverride::from))
    }

    async fn upsert(
        &self,
        city: &str,
        date: NaiveDate,
        min_temperature: f64,
        max_temperature: f64,
    ) -> NimbusResult<ForecastOverride> {
        debug!("Upserting forecast override for {} on {}", city, date);

        // The unique (city, date) index turns a concurrent duplicate insert
        // into an update. MySQL has no RETURNING, so upsert then re-select.
        sqlx::query(
            r#"
            INSERT INTO forecast_overrides
                (city, date, min_temperature, max_temperature, created_at, updated_at)
            VALUES (?, ?, ?, ?, UTC_TIMESTAMP(), UTC_TIMESTAMP())
            ON DUPLICATE KEY UPDATE
                min_temperature = VALUES(min_temperature),
                max_temperature = VALUES(max_temperature),
                updated_at = UTC_TIMESTAMP()
            "#,
        )
        .bind(city)
        .bind(date)
        .bind(min_temperature)
        .bind(max_temperature)
        .execute(self.pool.acquire()?)
        .await?;

        self.find_by_city_and_date(city, date)
            .await?
            .ok_or_else(|| {
                NimbusError::Internal("Failed to fetch upserted forecast override".to_string())
            })
    }

    async fn count(&self) -> NimbusResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM forecast_overrides")
            .fetch_one(self.pool.acquire()?)
            .await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlForecastOverrideRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlForecastOverrideRepository")
            .finish_non_exhaustive()
    }
}
