//! MySQL repository implementations.

mod forecast_override_repository;

pub use forecast_override_repository::MySqlForecastOverrideRepository;
