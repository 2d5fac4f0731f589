//! Application state for Axum handlers.

use nimbus_service::WeatherService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<dyn WeatherService>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(weather_service: Arc<dyn WeatherService>) -> Self {
        Self { weather_service }
    }

    /// Creates application state by resolving services from a DI module.
    #[must_use]
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn WeatherService>,
    {
        Self {
            weather_service: module.resolve(),
        }
    }
}
