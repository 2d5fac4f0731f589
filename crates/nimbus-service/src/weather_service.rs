//! Weather service trait definition.

use crate::dto::{
    CurrentWeatherResponse, ForecastOverrideResponse, ForecastResponse,
    SetForecastOverrideRequest,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use nimbus_core::{Interface, NimbusResult};

/// Weather lookup service.
///
/// Resolves weather queries with a fixed precedence — cache, then manual
/// override, then the external provider — and keeps results warm in cache
/// without permitting stale data after override edits. Input validation is
/// the API boundary's job; these methods only fail with provider or
/// infrastructure error kinds.
#[async_trait]
pub trait WeatherService: Interface + Send + Sync {
    /// Returns the current weather for a city.
    async fn current_weather(&self, city: &str) -> NimbusResult<CurrentWeatherResponse>;

    /// Returns the forecast for a city on a specific date.
    async fn forecast_for_date(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> NimbusResult<ForecastResponse>;

    /// Creates or replaces a manual forecast override and invalidates the
    /// matching cache entry.
    async fn set_forecast_override(
        &self,
        request: SetForecastOverrideRequest,
    ) -> NimbusResult<ForecastOverrideResponse>;
}
