//! Weatherbit API client.
//!
//! Wraps the Weatherbit `/current` and `/forecast/daily` endpoints and
//! converts their payloads into the gateway's provider types.

use crate::client::{CurrentConditions, DailyForecast, WeatherProvider};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use nimbus_config::ProviderConfig;
use nimbus_core::{NimbusError, NimbusResult};
use serde::Deserialize;
use shaku::Component;
use tracing::debug;

/// Metric units: Celsius, m/s, mm.
const UNITS: &str = "M";

/// Formats Weatherbit uses for the `ob_time` observation timestamp.
const OB_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];

/// Weatherbit API client.
#[derive(Component, Clone)]
#[shaku(interface = WeatherProvider)]
pub struct WeatherbitClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Response from `/current`.
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    data: Vec<CurrentObservation>,
}

#[derive(Debug, Deserialize)]
struct CurrentObservation {
    temp: Option<f64>,
    ob_time: Option<String>,
}

/// Response from `/forecast/daily`.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    data: Vec<ForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ForecastDay {
    datetime: NaiveDate,
    min_temp: f64,
    max_temp: f64,
}

impl WeatherbitClient {
    /// Creates a client from provider configuration.
    ///
    /// Every outbound call carries the configured timeout; the provider is
    /// the dominant latency source and a hung call must not hold a request
    /// slot open indefinitely.
    pub fn new(config: &ProviderConfig) -> NimbusResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| {
                NimbusError::Configuration(format!("Failed to build provider HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Returns a clone of the underlying HTTP client (for DI wiring).
    #[must_use]
    pub fn http_client(&self) -> reqwest::Client {
        self.client.clone()
    }

    /// Returns the normalized base URL (for DI wiring).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        city: &str,
    ) -> NimbusResult<T> {
        let url = format!("{}{}", self.base_url, path);

        debug!("Fetching {} for city '{}'", url, city);

        let response = self
            .client
            .get(&url)
            .query(&[("city", city), ("key", self.api_key.as_str()), ("units", UNITS)])
            .send()
            .await
            .map_err(|e| NimbusError::Provider(format!("Request to {} failed: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NimbusError::Provider(format!(
                "Provider returned {} for city '{}'",
                status.as_u16(),
                city
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| NimbusError::Provider(format!("Malformed provider response: {}", e)))
    }
}

#[async_trait]
impl WeatherProvider for WeatherbitClient {
    async fn fetch_current(&self, city: &str) -> NimbusResult<CurrentConditions> {
        let payload: CurrentResponse = self.get_json("/current", city).await?;

        let observation = payload
            .data
            .into_iter()
            .next()
            .ok_or_else(|| NimbusError::Provider(format!("No observation for city '{}'", city)))?;

        let temperature = observation.temp.ok_or_else(|| {
            NimbusError::Provider("Observation is missing the temperature field".to_string())
        })?;

        let ob_time = observation.ob_time.ok_or_else(|| {
            NimbusError::Provider("Observation is missing the ob_time field".to_string())
        })?;

        Ok(CurrentConditions {
            temperature,
            local_time: render_local_time(&ob_time)?,
        })
    }

    async fn fetch_daily_forecast(&self, city: &str) -> NimbusResult<Vec<DailyForecast>> {
        let payload: ForecastResponse = self.get_json("/forecast/daily", city).await?;

        if payload.data.is_empty() {
            return Err(NimbusError::Provider(format!(
                "No forecast data for city '{}'",
                city
            )));
        }

        Ok(payload
            .data
            .into_iter()
            .map(|day| DailyForecast {
                date: day.datetime,
                min_temperature: day.min_temp,
                max_temperature: day.max_temp,
            })
            .collect())
    }
}

/// Renders the upstream observation timestamp as `HH:MM` local time.
///
/// The timestamp is parsed explicitly rather than sliced by position, so a
/// format drift upstream surfaces as a provider error instead of silently
/// returning garbage.
fn render_local_time(ob_time: &str) -> NimbusResult<String> {
    OB_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(ob_time.trim(), format).ok())
        .map(|timestamp| timestamp.format("%H:%M").to_string())
        .ok_or_else(|| {
            NimbusError::Provider(format!("Unparseable observation time '{}'", ob_time))
        })
}

impl std::fmt::Debug for WeatherbitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherbitClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
