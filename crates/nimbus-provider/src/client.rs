//! Weather provider trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;
use nimbus_core::{Interface, NimbusResult};
use serde::{Deserialize, Serialize};

/// Current conditions for a city as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Local observation time, rendered as `HH:MM`.
    pub local_time: String,
}

/// One day of the provider's daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Forecast date.
    pub date: NaiveDate,
    /// Minimum temperature in degrees Celsius.
    pub min_temperature: f64,
    /// Maximum temperature in degrees Celsius.
    pub max_temperature: f64,
}

/// Client for the external weather source.
///
/// Implementations fail with the provider error kind when the city cannot
/// be resolved, the upstream is unreachable, or the payload is missing
/// required fields. Selecting a specific date out of the daily sequence is
/// the lookup service's job, not the client's.
#[async_trait]
pub trait WeatherProvider: Interface + Send + Sync {
    /// Fetches current conditions for a city.
    async fn fetch_current(&self, city: &str) -> NimbusResult<CurrentConditions>;

    /// Fetches the daily forecast sequence for a city.
    async fn fetch_daily_forecast(&self, city: &str) -> NimbusResult<Vec<DailyForecast>>;
}
