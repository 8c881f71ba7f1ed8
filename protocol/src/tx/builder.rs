//! Transaction drafting via the builder pattern.
//!
//! The [`TransactionBuilder`] is a mutable accumulator for the logical
//! fields of one transaction. It owns no messages — it borrows them from
//! the caller in insertion order — and it produces no bytes itself; the
//! encoding lives in [`super::codec`]. This separation keeps drafting
//! testable without touching the canonical format.
//!
//! Numeric setters validate their domain immediately and return
//! `Result<Self, TxError>`, so a bad value fails at the call site rather
//! than surfacing later as a rejected broadcast.

use crate::config::{DEFAULT_FEE, DEFAULT_GAS_LIMIT};
use crate::msg::Msg;
use crate::wallet::PublicKey;

use super::codec;
use super::error::TxError;
use super::{SignPayload, SignedEnvelope};

/// Fluent accumulator for one transaction draft.
///
/// Messages are appended in call order and embedded in that exact order —
/// the chain signs over message position, so the builder never re-sorts.
/// `account_number`, `sequence`, and `chain_id` start unset and become
/// mandatory only when bytes are produced; `fee`, `gas_limit`, and `memo`
/// carry chain defaults.
///
/// Not safe for unsynchronized sharing across threads: the draft is meant
/// to be configured by a single owner within one call stack, then encoded
/// through immutable borrows.
///
/// # Usage
///
/// ```
/// use band_protocol::msg::{Coin, MsgSend};
/// use band_protocol::tx::TransactionBuilder;
///
/// let msg = MsgSend::new("band1from", "band1to", vec![Coin::uband(100)]);
/// let draft = TransactionBuilder::new()
///     .with_message(&msg)
///     .with_account_number(335)?
///     .with_sequence(12)?
///     .with_chain_id("band-guanyu-mainnet")
///     .with_memo("rent");
/// let bytes = draft.sign_bytes()?;
/// # assert!(!bytes.is_empty());
/// # Ok::<(), band_protocol::tx::TxError>(())
/// ```
pub struct TransactionBuilder<'a> {
    pub(crate) msgs: Vec<&'a dyn Msg>,
    pub(crate) account_number: Option<u64>,
    pub(crate) sequence: Option<u64>,
    pub(crate) chain_id: Option<String>,
    pub(crate) fee: u64,
    pub(crate) gas_limit: u64,
    pub(crate) memo: String,
}

impl<'a> TransactionBuilder<'a> {
    /// Creates an empty draft with chain defaults: fee 0, gas 200000,
    /// empty memo.
    pub fn new() -> Self {
        Self {
            msgs: Vec::new(),
            account_number: None,
            sequence: None,
            chain_id: None,
            fee: DEFAULT_FEE,
            gas_limit: DEFAULT_GAS_LIMIT,
            memo: String::new(),
        }
    }

    /// Appends one message to the draft.
    pub fn with_message(mut self, msg: &'a dyn Msg) -> Self {
        self.msgs.push(msg);
        self
    }

    /// Appends several messages, preserving slice order.
    pub fn with_messages(mut self, msgs: &[&'a dyn Msg]) -> Self {
        self.msgs.extend_from_slice(msgs);
        self
    }

    /// Sets the account number. Last write wins.
    pub fn with_account_number(mut self, account_number: i64) -> Result<Self, TxError> {
        self.account_number = Some(non_negative("account_number", account_number)?);
        Ok(self)
    }

    /// Sets the sequence (per-account nonce). Last write wins.
    pub fn with_sequence(mut self, sequence: i64) -> Result<Self, TxError> {
        self.sequence = Some(non_negative("sequence", sequence)?);
        Ok(self)
    }

    /// Sets the chain identifier, e.g. `"band-guanyu-mainnet"`.
    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    /// Sets the fee amount in uband.
    pub fn with_fee(mut self, fee: i64) -> Result<Self, TxError> {
        self.fee = non_negative("fee", fee)?;
        Ok(self)
    }

    /// Sets the gas limit. Zero gas buys zero execution, so zero is
    /// rejected along with negatives.
    pub fn with_gas_limit(mut self, gas_limit: i64) -> Result<Self, TxError> {
        if gas_limit <= 0 {
            return Err(TxError::InvalidArgument {
                field: "gas_limit",
                expected: "a positive integer",
                value: gas_limit,
            });
        }
        self.gas_limit = gas_limit as u64;
        Ok(self)
    }

    /// Sets the memo. Unconstrained free text; defaults to empty.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Returns the canonical byte sequence to be signed.
    ///
    /// See [`codec::sign_bytes`] for the precondition order and the exact
    /// byte contract.
    pub fn sign_bytes(&self) -> Result<Vec<u8>, TxError> {
        codec::sign_bytes(self)
    }

    /// Returns the ordered sign payload backing [`Self::sign_bytes`].
    pub fn sign_payload(&self) -> Result<SignPayload, TxError> {
        codec::sign_payload(self)
    }

    /// Assembles the broadcast envelope from an externally produced
    /// signature and the matching public key.
    pub fn envelope(&self, signature: &[u8], pubkey: &PublicKey) -> Result<SignedEnvelope, TxError> {
        codec::envelope(self, signature, pubkey)
    }
}

impl Default for TransactionBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Domain check shared by the non-negative numeric setters.
fn non_negative(field: &'static str, value: i64) -> Result<u64, TxError> {
    u64::try_from(value).map_err(|_| TxError::InvalidArgument {
        field,
        expected: "a non-negative integer",
        value,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
