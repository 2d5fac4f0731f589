//! # Nimbus Core
//!
//! Core types, traits, and error definitions for the Nimbus weather gateway.
//! This crate provides the foundational abstractions used across all layers.

pub mod domain;
pub mod error;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
