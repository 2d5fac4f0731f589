//! Weather service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{
    CurrentWeatherResponse, ForecastOverrideResponse, ForecastResponse,
    SetForecastOverrideRequest,
};
use crate::weather_service::WeatherService;
use async_trait::async_trait;
use chrono::NaiveDate;
use nimbus_core::{CityName, NimbusError, NimbusResult};
use nimbus_provider::WeatherProvider;
use nimbus_repository::ForecastOverrideRepository;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default TTL for current-weather entries (5 minutes).
pub const DEFAULT_CURRENT_WEATHER_TTL: Duration = Duration::from_secs(300);

/// Default TTL for forecast entries (1 hour).
pub const DEFAULT_FORECAST_TTL: Duration = Duration::from_secs(3600);

/// Weather lookup service.
///
/// Resolution order for forecasts: cache, override store, provider.
/// Because the cache is consulted before the override store, every override
/// write must delete the matching cache key — see
/// [`set_forecast_override`](WeatherService::set_forecast_override).
#[derive(Component)]
#[shaku(interface = WeatherService)]
pub struct WeatherServiceComponent {
    #[shaku(inject)]
    overrides: Arc<dyn ForecastOverrideRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(inject)]
    provider: Arc<dyn WeatherProvider>,
    #[shaku(default = DEFAULT_CURRENT_WEATHER_TTL)]
    current_weather_ttl: Duration,
    #[shaku(default = DEFAULT_FORECAST_TTL)]
    forecast_ttl: Duration,
}

impl WeatherServiceComponent {
    /// Creates a weather service with explicit collaborators.
    #[must_use]
    pub fn new(
        overrides: Arc<dyn ForecastOverrideRepository>,
        cache: Arc<dyn CacheInterface>,
        provider: Arc<dyn WeatherProvider>,
        current_weather_ttl: Duration,
        forecast_ttl: Duration,
    ) -> Self {
        Self {
            overrides,
            cache,
            provider,
            current_weather_ttl,
            forecast_ttl,
        }
    }

    /// Writes a freshly resolved payload to the cache.
    ///
    /// A failed write is logged and swallowed: the resolved value is still
    /// correct and the entry will be repopulated on a later read.
    async fn cache_result<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) {
        if let Err(e) = self.cache.set(key, value, ttl).await {
            warn!("Failed to cache key '{}': {}", key, e);
        }
    }
}

#[async_trait]
impl WeatherService for WeatherServiceComponent {
    async fn current_weather(&self, city: &str) -> NimbusResult<CurrentWeatherResponse> {
        let city = CityName::new(city);
        let cache_key = cache_keys::current_weather(city.as_str());

        if let Some(cached) = self.cache.get::<CurrentWeatherResponse>(&cache_key).await? {
            debug!("Current weather for '{}' served from cache", city);
            return Ok(cached);
        }

        let conditions = self.provider.fetch_current(city.as_str()).await?;
        let response = CurrentWeatherResponse {
            temperature: conditions.temperature,
            local_time: conditions.local_time,
        };

        self.cache_result(&cache_key, &response, self.current_weather_ttl)
            .await;

        info!("Current weather for '{}' served from provider", city);
        Ok(response)
    }

    async fn forecast_for_date(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> NimbusResult<ForecastResponse> {
        let city = CityName::new(city);
        let cache_key = cache_keys::forecast(city.as_str(), date);

        if let Some(cached) = self.cache.get::<ForecastResponse>(&cache_key).await? {
            debug!("Forecast for '{}' on {} served from cache", city, date);
            return Ok(cached);
        }

        if let Some(record) = self
            .overrides
            .find_by_city_and_date(city.as_str(), date)
            .await?
        {
            let response = ForecastResponse {
                min_temperature: record.min_temperature,
                max_temperature: record.max_temperature,
            };

            self.cache_result(&cache_key, &response, self.forecast_ttl).await;

            info!("Forecast for '{}' on {} served from override store", city, date);
            return Ok(response);
        }

        let days = self.provider.fetch_daily_forecast(city.as_str()).await?;
        let day = days.into_iter().find(|day| day.date == date).ok_or_else(|| {
            NimbusError::Provider(format!(
                "No forecast entry for '{}' on {}",
                city, date
            ))
        })?;

        let response = ForecastResponse {
            min_temperature: day.min_temperature,
            max_temperature: day.max_temperature,
        };

        self.cache_result(&cache_key, &response, self.forecast_ttl).await;

        info!("Forecast for '{}' on {} served from provider", city, date);
        Ok(response)
    }

    async fn set_forecast_override(
        &self,
        request: SetForecastOverrideRequest,
    ) -> NimbusResult<ForecastOverrideResponse> {
        let city = CityName::new(&request.city);

        let record = self
            .overrides
            .upsert(
                city.as_str(),
                request.date,
                request.min_temperature,
                request.max_temperature,
            )
            .await?;

        // The cache is consulted before the override store on reads, so the
        // entry must go — unconditionally, even when nothing was cached. A
        // failed delete propagates: silently keeping a stale entry would
        // make the override invisible until TTL expiry.
        self.cache
            .delete(&cache_keys::forecast(city.as_str(), request.date))
            .await?;

        info!(
            "Forecast override stored for '{}' on {}; cache entry invalidated",
            city, request.date
        );
        Ok(ForecastOverrideResponse::from(record))
    }
}

impl std::fmt::Debug for WeatherServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherServiceComponent").finish_non_exhaustive()
    }
}
