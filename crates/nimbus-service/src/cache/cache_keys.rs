//! Cache key generators for consistent key naming.

use chrono::NaiveDate;

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "nimbus:cache";

/// Generate a cache key for a city's current weather.
#[must_use]
pub fn current_weather(city: &str) -> String {
    format!("{}:current:{}", CACHE_PREFIX, city.to_lowercase())
}

/// Generate a cache key for a city's forecast on a date.
///
/// The date is rendered in ISO form so both accepted input formats land on
/// the same entry.
#[must_use]
pub fn forecast(city: &str, date: NaiveDate) -> String {
    format!(
        "{}:forecast:{}:{}",
        CACHE_PREFIX,
        city.to_lowercase(),
        date.format("%Y-%m-%d")
    )
}
