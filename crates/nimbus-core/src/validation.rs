//! Validation utilities.
//!
//! All request validation runs at the API boundary, before the lookup
//! service is invoked. The rules here are shared between the REST layer
//! and the DTO deserializers.

use crate::{NimbusError, NimbusResult};
use chrono::{Days, NaiveDate};

/// Accepted wire formats for forecast dates.
const DATE_FORMAT_DOTTED: &str = "%d.%m.%Y";
const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

/// Forecasts may be requested at most this many days ahead.
pub const MAX_FORECAST_DAYS_AHEAD: u64 = 10;

/// Parses a date in either `DD.MM.YYYY` or ISO `YYYY-MM-DD` form.
pub fn parse_weather_date(raw: &str) -> NimbusResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT_DOTTED)
        .or_else(|_| NaiveDate::parse_from_str(raw, DATE_FORMAT_ISO))
        .map_err(|_| {
            NimbusError::validation(format!(
                "Date '{}' is not in DD.MM.YYYY or YYYY-MM-DD format",
                raw
            ))
        })
}

/// Checks that a forecast date lies inside the serviceable window:
/// not in the past, and at most [`MAX_FORECAST_DAYS_AHEAD`] days from `today`.
pub fn validate_forecast_date(date: NaiveDate, today: NaiveDate) -> NimbusResult<()> {
    if date < today {
        return Err(NimbusError::validation("Date cannot be in the past."));
    }

    let horizon = today
        .checked_add_days(Days::new(MAX_FORECAST_DAYS_AHEAD))
        .ok_or_else(|| NimbusError::internal("forecast horizon overflow"))?;

    if date > horizon {
        return Err(NimbusError::validation(format!(
            "Date cannot be more than {} days ahead.",
            MAX_FORECAST_DAYS_AHEAD
        )));
    }

    Ok(())
}

/// Checks that the minimum temperature does not exceed the maximum.
pub fn validate_temperature_range(min_temperature: f64, max_temperature: f64) -> NimbusResult<()> {
    if min_temperature > max_temperature {
        return Err(NimbusError::validation(
            "Minimum temperature cannot exceed maximum temperature.",
        ));
    }
    Ok(())
}

/// Checks that a city parameter is usable: non-blank after trimming.
pub fn validate_city(raw: &str) -> NimbusResult<()> {
    if raw.trim().is_empty() {
        return Err(NimbusError::validation("City must not be blank."));
    }
    if raw.len() > 100 {
        return Err(NimbusError::validation("City name is too long."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_dotted_format() {
        assert_eq!(parse_weather_date("05.01.2025").unwrap(), date(2025, 1, 5));
    }

    #[test]
    fn test_parse_iso_format() {
        assert_eq!(parse_weather_date("2025-01-05").unwrap(), date(2025, 1, 5));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_weather_date(" 2025-01-05 ").unwrap(), date(2025, 1, 5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_weather_date("01/05/2025").is_err());
        assert!(parse_weather_date("not-a-date").is_err());
        assert!(parse_weather_date("").is_err());
    }

    #[test]
    fn test_forecast_date_today_accepted() {
        let today = date(2025, 6, 15);
        assert!(validate_forecast_date(today, today).is_ok());
    }

    #[test]
    fn test_forecast_date_ten_days_ahead_accepted() {
        let today = date(2025, 6, 15);
        assert!(validate_forecast_date(date(2025, 6, 25), today).is_ok());
    }

    #[test]
    fn test_forecast_date_eleven_days_ahead_rejected() {
        let today = date(2025, 6, 15);
        let result = validate_forecast_date(date(2025, 6, 26), today);
        assert!(matches!(result, Err(NimbusError::Validation(_))));
    }

    #[test]
    fn test_forecast_date_yesterday_rejected() {
        let today = date(2025, 6, 15);
        let result = validate_forecast_date(date(2025, 6, 14), today);
        assert!(matches!(result, Err(NimbusError::Validation(_))));
    }

    #[test]
    fn test_temperature_range_inverted_rejected() {
        assert!(validate_temperature_range(10.0, 5.0).is_err());
    }

    #[test]
    fn test_temperature_range_ordered_accepted() {
        assert!(validate_temperature_range(5.0, 10.0).is_ok());
    }

    #[test]
    fn test_temperature_range_equal_accepted() {
        assert!(validate_temperature_range(5.0, 5.0).is_ok());
    }

    #[test]
    fn test_city_blank_rejected() {
        assert!(validate_city("").is_err());
        assert!(validate_city("   ").is_err());
        assert!(validate_city("Moscow").is_ok());
    }
}
