//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the
//! REST API.

use nimbus_core::{ErrorResponse, FieldError};
use nimbus_service::{
    CurrentWeatherResponse, ForecastOverrideResponse, ForecastResponse,
    SetForecastOverrideRequest,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Nimbus weather gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nimbus Weather Gateway API",
        version = "1.0.0",
        description = "HTTP API for current weather and date-scoped forecasts, \
                       with manual forecast overrides",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Weather endpoints
        crate::controllers::weather_controller::current_weather,
        crate::controllers::weather_controller::forecast,
        crate::controllers::weather_controller::set_forecast_override,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            CurrentWeatherResponse,
            ForecastResponse,
            SetForecastOverrideRequest,
            ForecastOverrideResponse,
        )
    ),
    tags(
        (name = "weather", description = "Weather lookups and overrides"),
        (name = "health", description = "Service health endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().unwrap();
        assert!(json.contains("/weather/current"));
        assert!(json.contains("/weather/forecast"));
    }
}
