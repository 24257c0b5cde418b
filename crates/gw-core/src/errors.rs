//! Cross-cutting error types for Gapwise.
//!
//! This module defines the errors that any pipeline operation may report to a
//! caller. Storage-specific errors (`StoreError`) and configuration errors
//! (`ConfigError`) live in their respective crates and wrap `CoreError`.
//!
//! Degraded upstream input is deliberately absent here: it is modelled as the
//! `Fallback` arm of `gw_engine::upstream::Upstream` and absorbed locally.

use thiserror::Error;

/// Errors that can be raised by any Gapwise crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Session, cached content, or progress record lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A required request field is missing or a value is out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The skill standard matrix is empty or unavailable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A session workflow step was attempted out of order.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Whether the caller's request should be rejected as bad input
    /// (as opposed to a missing entity or an internal failure).
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidTransition { .. })
    }
}
