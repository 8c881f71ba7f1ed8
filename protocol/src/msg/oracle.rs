//! Oracle data request message.
//!
//! Asks `ask_count` validators to run an oracle script and considers the
//! request resolved once `min_count` of them report. Canonical type tag
//! `oracle/Request`; value keys in lexical order with integers as decimal
//! strings and calldata base64-encoded.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::canonical::CanonicalValue;
use crate::config::MAX_CALLDATA_BYTES;

use super::{Msg, ValidationError};

/// A request for oracle data.
///
/// `calldata` is the raw input to the oracle script — owasm-encoded
/// parameters, opaque to this client beyond the size cap the chain's
/// keeper enforces.
///
/// # Examples
///
/// ```
/// use band_protocol::msg::{Msg, MsgRequest};
///
/// let msg = MsgRequest::new(1, b"\x00\x00\x00\x03BTC".to_vec(), 4, 3)
///     .with_client_id("band-price-feed")
///     .with_sender("band1trx2cm6vm9v63grg9uhmk7sy233zve4q25rgre");
/// assert!(msg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgRequest {
    /// Id of the oracle script to execute. Script ids start at 1.
    pub oracle_script_id: u64,
    /// Raw calldata passed to the oracle script.
    pub calldata: Vec<u8>,
    /// Number of validators asked to serve the request.
    pub ask_count: u64,
    /// Number of reports required before the request resolves.
    pub min_count: u64,
    /// Free-form client identifier echoed back in the oracle result.
    pub client_id: String,
    /// Address paying for and signing the request (bech32).
    pub sender: String,
}

impl MsgRequest {
    /// Creates a request with empty `client_id` and `sender`; fill them via
    /// the `with_*` methods before validating.
    pub fn new(oracle_script_id: u64, calldata: Vec<u8>, ask_count: u64, min_count: u64) -> Self {
        Self {
            oracle_script_id,
            calldata,
            ask_count,
            min_count,
            client_id: String::new(),
            sender: String::new(),
        }
    }

    /// Sets the client identifier.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Sets the sender address.
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }
}

impl Msg for MsgRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.oracle_script_id == 0 {
            return Err(ValidationError::ZeroOracleScriptId);
        }
        if self.min_count == 0 {
            return Err(ValidationError::ZeroMinCount);
        }
        if self.ask_count < self.min_count {
            return Err(ValidationError::AskCountTooLow {
                ask_count: self.ask_count,
                min_count: self.min_count,
            });
        }
        if self.calldata.len() > MAX_CALLDATA_BYTES {
            return Err(ValidationError::CalldataTooLarge {
                size: self.calldata.len(),
                max: MAX_CALLDATA_BYTES,
            });
        }
        if self.sender.is_empty() {
            return Err(ValidationError::EmptyField { field: "sender" });
        }
        Ok(())
    }

    fn canonical_form(&self) -> CanonicalValue {
        CanonicalValue::object([
            ("type", CanonicalValue::string("oracle/Request")),
            (
                "value",
                CanonicalValue::object([
                    (
                        "ask_count",
                        CanonicalValue::string(self.ask_count.to_string()),
                    ),
                    (
                        "calldata",
                        CanonicalValue::string(BASE64.encode(&self.calldata)),
                    ),
                    ("client_id", CanonicalValue::string(self.client_id.clone())),
                    (
                        "min_count",
                        CanonicalValue::string(self.min_count.to_string()),
                    ),
                    (
                        "oracle_script_id",
                        CanonicalValue::string(self.oracle_script_id.to_string()),
                    ),
                    ("sender", CanonicalValue::string(self.sender.clone())),
                ]),
            ),
        ])
    }
}
