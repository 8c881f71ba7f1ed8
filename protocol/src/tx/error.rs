//! Error types for transaction configuration and encoding.
//!
//! Everything here is synchronous and fail-fast: there is no I/O in this
//! crate, so every error is a caller bug to fix before retrying, never a
//! transient condition to recover from.

use thiserror::Error;

use crate::msg::ValidationError;

/// Errors raised while configuring a draft or encoding it.
#[derive(Debug, Error)]
pub enum TxError {
    /// A numeric configuration value outside the field's accepted domain
    /// (negative, or zero where the chain requires a positive value).
    /// Raised at configuration time so the caller gets immediate feedback.
    #[error("invalid {field}: expected {expected}, got {value}")]
    InvalidArgument {
        /// The builder field being set.
        field: &'static str,
        /// What the field accepts.
        expected: &'static str,
        /// The rejected input.
        value: i64,
    },

    /// A field that is optional during configuration but mandatory at
    /// encode time was never set.
    #[error("{0} should be defined")]
    MissingField(&'static str),

    /// Encoding was attempted on a draft with no messages.
    #[error("transaction contains no messages")]
    EmptyTransaction,

    /// A message failed its own validation. Propagated verbatim — the
    /// message's error text is the caller-facing text.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
