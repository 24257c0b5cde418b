//! Store error types for gw-store.

use gw_config::ConfigError;
use gw_core::errors::CoreError;
use thiserror::Error;

/// Errors from session storage and the service layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A pipeline error: not found, invalid input, or a workflow violation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing the data directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A lock was poisoned by a panicking writer.
    #[error("Lock poisoned: {0}")]
    Poisoned(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StoreError {
    /// The wrapped pipeline error, if any.
    #[must_use]
    pub const fn as_core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }

    /// Whether the caller's request should be rejected as bad input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        match self {
            Self::Core(err) => err.is_invalid_input(),
            _ => false,
        }
    }
}
