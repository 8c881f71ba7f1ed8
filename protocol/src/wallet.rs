//! # Public Key Wrapper
//!
//! The envelope needs a public key; this module is the thin shim that
//! carries one. No curve math happens here — whether the bytes are a
//! valid secp256k1 point is between the signer that produced them and the
//! chain that checks them. This crate just needs to shuttle the bytes
//! between hex (how keys arrive from wallets and CLIs) and base64 (how
//! they ride in the envelope).
//!
//! Key bytes are public by definition, so unlike private-key handling
//! there is no zeroization or Debug-redaction ceremony — but Debug still
//! truncates, because 66 hex characters in a log line helps nobody.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while parsing key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The input was not valid hexadecimal.
    #[error("public key is not valid hex")]
    InvalidHex,
}

/// An opaque public key blob.
///
/// Typically a 33-byte compressed secp256k1 key
/// ([`COMPRESSED_PUBKEY_LENGTH`](crate::config::COMPRESSED_PUBKEY_LENGTH)),
/// but the length is not enforced — the envelope assembler treats keys the
/// same way it treats signatures: as bytes supplied by a collaborator that
/// is responsible for their correctness.
///
/// # Examples
///
/// ```
/// use band_protocol::wallet::PublicKey;
///
/// let pk = PublicKey::from_hex(
///     "0260d0487a3dfce9228eee2d0d83a40f6131f551526c8e52066fe7fe1e4a0f193a",
/// ).unwrap();
/// assert_eq!(pk.as_bytes().len(), 33);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Wraps raw key bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Parses a hex-encoded public key.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidHex)?;
        Ok(Self { bytes })
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex-encoded representation, lowercase.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Base64 of the raw bytes — the form embedded in the envelope's
    /// `pub_key.value`.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        if hex_str.len() > 16 {
            write!(f, "PublicKey({}…)", &hex_str[..16])
        } else {
            write!(f, "PublicKey({})", hex_str)
        }
    }
}
