//! # Nimbus REST
//!
//! REST API layer using Axum for the Nimbus weather gateway.
//! Provides HTTP endpoints for weather lookups, forecast overrides, and
//! health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
