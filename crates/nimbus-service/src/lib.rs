//! # Nimbus Service
//!
//! Weather lookup service layer: the cache/override/provider precedence
//! logic, the cache abstraction, and the API-facing DTOs.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod weather_service;

pub use cache::*;
pub use dto::*;
pub use r#impl::*;
pub use weather_service::*;
