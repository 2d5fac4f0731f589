//! Domain entities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A manually entered forecast that takes precedence over the external
/// weather provider.
///
/// One record exists per `(city, date)` pair; writes for an existing pair
/// replace the temperatures (upsert) while preserving the creation
/// metadata. Records never expire on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOverride {
    /// Storage identifier (auto-increment).
    pub id: i64,

    /// City name, stored lowercase.
    pub city: String,

    /// Calendar date the override applies to.
    pub date: NaiveDate,

    /// Minimum temperature in degrees Celsius.
    pub min_temperature: f64,

    /// Maximum temperature in degrees Celsius.
    pub max_temperature: f64,

    /// Record creation timestamp, preserved across upserts.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_date_as_iso() {
        let override_record = ForecastOverride {
            id: 1,
            city: "moscow".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            min_temperature: -2.0,
            max_temperature: 4.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&override_record).unwrap();
        assert_eq!(json["date"], "2025-01-05");
        assert_eq!(json["city"], "moscow");
    }
}
