//! Unified error types for the job board backend.

use thiserror::Error;

/// Unified error type for startup and configuration.
///
/// Request handling never produces this type: store failures are folded into
/// degraded responses by the [`service`](crate::service) layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Document store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a [`JobStore`](crate::store::JobStore) implementation.
///
/// Display output is the underlying description without a prefix, since the
/// diagnostics report embeds a truncated copy of it.
#[derive(Error, Debug)]
pub enum StoreError {
    /// MongoDB driver error.
    #[cfg(feature = "mongo")]
    #[error("{0}")]
    Mongo(#[from] mongodb::error::Error),

    /// A stored document could not be converted to a job record.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// A search pattern failed to compile.
    #[error("{0}")]
    Pattern(#[from] regex::Error),

    /// Generic backend failure.
    #[error("{0}")]
    Backend(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display_is_unprefixed() {
        let err = StoreError::Backend("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");

        let app: AppError = err.into();
        assert_eq!(app.to_string(), "store error: connection refused");
    }
}
