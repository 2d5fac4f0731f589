//! Service implementations.

mod weather_service_impl;

pub use weather_service_impl::{
    WeatherServiceComponent, WeatherServiceComponentParameters, DEFAULT_CURRENT_WEATHER_TTL,
    DEFAULT_FORECAST_TTL,
};
