//! # Message Module
//!
//! A transaction carries one or more *messages* — self-contained units of
//! chain-level intent. The encoder treats them as opaque: anything that can
//! validate itself and render an ordered canonical form can ride in a
//! transaction.
//!
//! ## Architecture
//!
//! ```text
//! mod.rs    — The Msg capability trait, ValidationError, and Coin
//! bank.rs   — MsgSend: token transfer between two addresses
//! oracle.rs — MsgRequest: BandChain oracle data request
//! ```
//!
//! ## Design Decisions
//!
//! - Messages are owned by the caller; the transaction builder borrows them.
//!   A message outlives the draft it rides in, never the other way around.
//! - `canonical_form` returns the amino-style `{type, value}` object with
//!   value keys already in lexical order. The encoder never re-sorts nested
//!   structures, so each message is responsible for emitting its own fields
//!   in the order the chain expects.
//! - Validation errors propagate to the encoder verbatim — no wrapping, no
//!   reinterpretation. A message knows its own rules best.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::canonical::{decimal_string, CanonicalValue};

pub mod bank;
pub mod oracle;

pub use bank::MsgSend;
pub use oracle::MsgRequest;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced by a message's own validation.
///
/// Each variant maps to one rule. These surface through the encoder
/// unchanged (it marks them `#[error(transparent)]`), so the text here is
/// what the caller ultimately sees.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required string or list field was left empty.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A coin with a zero amount. The chain rejects zero-value coins, so
    /// sending one only wastes the fee.
    #[error("coin amount for {denom} must be positive")]
    ZeroCoin { denom: String },

    /// Oracle script ids start at 1; zero is not a script.
    #[error("oracle script id must be positive")]
    ZeroOracleScriptId,

    /// An oracle request that no validator needs to answer is meaningless.
    #[error("min count must be at least 1")]
    ZeroMinCount,

    /// Asking fewer validators than the answer threshold can never resolve.
    #[error("ask count {ask_count} is lower than min count {min_count}")]
    AskCountTooLow { ask_count: u64, min_count: u64 },

    /// Calldata above the chain's keeper limit is rejected server-side;
    /// catching it here saves a round trip.
    #[error("calldata is {size} bytes, exceeding the {max} byte limit")]
    CalldataTooLarge { size: usize, max: usize },
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// The message capability: validate yourself, then render your canonical
/// form.
///
/// `canonical_form` must return an *ordered* object — typically the
/// amino-style `{"type": ..., "value": {...}}` pair — with every numeric
/// chain quantity already rendered as a decimal string. The encoder embeds
/// the result positionally, exactly as returned.
pub trait Msg {
    /// Checks the message's own invariants. Called by the encoder before
    /// any bytes are produced; the error is propagated unchanged.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Renders the ordered canonical form embedded in sign bytes and in the
    /// broadcast envelope.
    fn canonical_form(&self) -> CanonicalValue;
}

// ---------------------------------------------------------------------------
// Coin
// ---------------------------------------------------------------------------

/// An amount of a single denomination, in the smallest indivisible unit.
///
/// `amount` is always an integer — no floating point anywhere near money.
/// On the wire the amount travels as a decimal string (`{"amount":"10",
/// "denom":"uband"}`), which the serde derive below produces directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Value in the smallest unit of `denom`.
    #[serde(with = "decimal_string")]
    pub amount: u64,
    /// The denomination, e.g. `"uband"`.
    pub denom: String,
}

impl Coin {
    /// Creates a new coin.
    pub fn new(amount: u64, denom: impl Into<String>) -> Self {
        Self {
            amount,
            denom: denom.into(),
        }
    }

    /// Shorthand for an amount of [`FEE_DENOM`](crate::config::FEE_DENOM).
    pub fn uband(amount: u64) -> Self {
        Self::new(amount, crate::config::FEE_DENOM)
    }

    /// Renders the canonical `{"amount": "...", "denom": "..."}` object.
    pub fn to_canonical(&self) -> CanonicalValue {
        CanonicalValue::object([
            ("amount", CanonicalValue::string(self.amount.to_string())),
            ("denom", CanonicalValue::string(self.denom.clone())),
        ])
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_canonical_form_is_amount_then_denom() {
        let coin = Coin::uband(100);
        assert_eq!(
            coin.to_canonical().to_json_string(),
            r#"{"amount":"100","denom":"uband"}"#
        );
    }

    #[test]
    fn coin_serde_matches_canonical_form() {
        // The serde derive and to_canonical must agree byte-for-byte; the
        // fee block uses one, message payloads use the other.
        let coin = Coin::new(42, "uband");
        assert_eq!(
            serde_json::to_string(&coin).unwrap(),
            coin.to_canonical().to_json_string()
        );
    }

    #[test]
    fn coin_display() {
        assert_eq!(Coin::uband(250).to_string(), "250uband");
    }

    #[test]
    fn coin_serde_roundtrip() {
        let coin = Coin::new(1_000_000, "uband");
        let json = serde_json::to_string(&coin).unwrap();
        let back: Coin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coin);
    }
}
