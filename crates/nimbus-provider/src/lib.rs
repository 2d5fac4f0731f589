//! # Nimbus Provider
//!
//! Client for the external weather source. The lookup service only sees the
//! [`WeatherProvider`] trait; the Weatherbit implementation lives behind it.

pub mod client;
pub mod weatherbit;

pub use client::{CurrentConditions, DailyForecast, WeatherProvider};
pub use weatherbit::{WeatherbitClient, WeatherbitClientParameters};
