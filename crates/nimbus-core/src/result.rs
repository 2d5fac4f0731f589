//! Result type aliases for the Nimbus weather gateway.

use crate::NimbusError;

/// A specialized `Result` type for Nimbus operations.
pub type NimbusResult<T> = Result<T, NimbusError>;

/// A boxed future returning a `NimbusResult`.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = NimbusResult<T>> + Send + 'a>>;
