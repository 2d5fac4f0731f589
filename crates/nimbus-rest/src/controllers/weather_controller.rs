//! Weather controller.
//!
//! All request validation happens here, before the lookup service runs:
//! the service layer only ever reports provider or infrastructure failures.

use crate::{
    extractors::ValidatedJson,
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Local;
use nimbus_core::{
    parse_weather_date, validate_city, validate_forecast_date, validate_temperature_range,
};
use nimbus_service::{
    CurrentWeatherResponse, ForecastOverrideResponse, ForecastResponse,
    SetForecastOverrideRequest,
};
use serde::Deserialize;
use tracing::debug;

/// Creates the weather router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current", get(current_weather))
        .route("/forecast", get(forecast).post(set_forecast_override))
}

/// Query parameters for the current weather endpoint.
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherQuery {
    pub city: String,
}

/// Query parameters for the forecast endpoint.
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub city: String,
    /// Date in `DD.MM.YYYY` or ISO `YYYY-MM-DD` form.
    pub date: String,
}

/// Get the current weather for a city.
#[utoipa::path(
    get,
    path = "/weather/current",
    tag = "weather",
    params(
        ("city" = String, Query, description = "City name (English)")
    ),
    responses(
        (status = 200, description = "Current weather", body = CurrentWeatherResponse),
        (status = 400, description = "Invalid parameters", body = nimbus_core::ErrorResponse),
        (status = 503, description = "Weather provider unavailable", body = nimbus_core::ErrorResponse)
    )
)]
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<CurrentWeatherQuery>,
) -> ApiResult<CurrentWeatherResponse> {
    debug!("Current weather request for '{}'", query.city);

    validate_city(&query.city)?;

    let response = state.weather_service.current_weather(&query.city).await?;
    ok(response)
}

/// Get the forecast for a city on a specific date.
#[utoipa::path(
    get,
    path = "/weather/forecast",
    tag = "weather",
    params(
        ("city" = String, Query, description = "City name (English)"),
        ("date" = String, Query, description = "Date, DD.MM.YYYY or YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Forecast for the date", body = ForecastResponse),
        (status = 400, description = "Invalid parameters", body = nimbus_core::ErrorResponse),
        (status = 503, description = "Weather provider unavailable", body = nimbus_core::ErrorResponse)
    )
)]
pub async fn forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> ApiResult<ForecastResponse> {
    debug!("Forecast request for '{}' on '{}'", query.city, query.date);

    validate_city(&query.city)?;
    let date = parse_weather_date(&query.date)?;
    validate_forecast_date(date, Local::now().date_naive())?;

    let response = state
        .weather_service
        .forecast_for_date(&query.city, date)
        .await?;
    ok(response)
}

/// Create or replace a forecast override for a city and date.
#[utoipa::path(
    post,
    path = "/weather/forecast",
    tag = "weather",
    request_body = SetForecastOverrideRequest,
    responses(
        (status = 201, description = "Override stored", body = ForecastOverrideResponse),
        (status = 400, description = "Invalid payload", body = nimbus_core::ErrorResponse),
        (status = 503, description = "Downstream dependency unavailable", body = nimbus_core::ErrorResponse)
    )
)]
pub async fn set_forecast_override(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SetForecastOverrideRequest>,
) -> Result<(StatusCode, Json<ForecastOverrideResponse>), AppError> {
    debug!(
        "Forecast override request for '{}' on {}",
        request.city, request.date
    );

    validate_forecast_date(request.date, Local::now().date_naive())?;
    validate_temperature_range(request.min_temperature, request.max_temperature)?;

    let response = state.weather_service.set_forecast_override(request).await?;
    Ok(created(response))
}
