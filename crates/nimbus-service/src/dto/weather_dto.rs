//! Weather-related DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use nimbus_core::ForecastOverride;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Current weather payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrentWeatherResponse {
    /// Current temperature in degrees Celsius.
    pub temperature: f64,
    /// Local time at the city, `HH:MM`.
    pub local_time: String,
}

/// Forecast payload for a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponse {
    /// Minimum temperature in degrees Celsius.
    pub min_temperature: f64,
    /// Maximum temperature in degrees Celsius.
    pub max_temperature: f64,
}

/// Request to create or replace a forecast override.
///
/// The date field accepts both `DD.MM.YYYY` and ISO `YYYY-MM-DD` input.
/// Range checks (date window, temperature ordering) run at the API
/// boundary; this struct only carries shape-level validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetForecastOverrideRequest {
    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: String,

    #[serde(deserialize_with = "weather_date::deserialize")]
    pub date: NaiveDate,

    pub min_temperature: f64,

    pub max_temperature: f64,
}

/// Stored forecast override payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastOverrideResponse {
    pub id: i64,
    pub city: String,
    pub date: NaiveDate,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ForecastOverride> for ForecastOverrideResponse {
    fn from(record: ForecastOverride) -> Self {
        Self {
            id: record.id,
            city: record.city,
            date: record.date,
            min_temperature: record.min_temperature,
            max_temperature: record.max_temperature,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Serde support for the dual-format forecast date.
mod weather_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        nimbus_core::parse_weather_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_request_accepts_iso_date() {
        let request: SetForecastOverrideRequest = serde_json::from_value(serde_json::json!({
            "city": "Moscow",
            "date": "2025-01-05",
            "min_temperature": -2.0,
            "max_temperature": 4.0
        }))
        .unwrap();

        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    }

    #[test]
    fn test_request_accepts_dotted_date() {
        let request: SetForecastOverrideRequest = serde_json::from_value(serde_json::json!({
            "city": "Moscow",
            "date": "05.01.2025",
            "min_temperature": -2.0,
            "max_temperature": 4.0
        }))
        .unwrap();

        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    }

    #[test]
    fn test_request_rejects_bad_date() {
        let result: Result<SetForecastOverrideRequest, _> =
            serde_json::from_value(serde_json::json!({
                "city": "Moscow",
                "date": "05/01/2025",
                "min_temperature": -2.0,
                "max_temperature": 4.0
            }));

        assert!(result.is_err());
    }

    #[test]
    fn test_request_rejects_blank_city() {
        let request = SetForecastOverrideRequest {
            city: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            min_temperature: -2.0,
            max_temperature: 4.0,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_current_weather_response_roundtrip() {
        let response = CurrentWeatherResponse {
            temperature: -4.2,
            local_time: "14:30".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        let back: CurrentWeatherResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
