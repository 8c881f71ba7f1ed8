//! # Transaction Module
//!
//! Construction and canonical encoding of BandChain transactions.
//!
//! ## Architecture
//!
//! ```text
//! builder.rs — Fluent TransactionBuilder: the mutable draft accumulator
//! codec.rs   — Pure canonical encoder: sign bytes and the signed envelope
//! error.rs   — TxError: the encode/configure failure taxonomy
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Configure** — chain the builder's `with_*` methods.
//! 2. **Sign bytes** — [`TransactionBuilder::sign_bytes`] produces the exact
//!    byte sequence an external signer must sign.
//! 3. **Envelope** — [`TransactionBuilder::envelope`] bundles messages, fee,
//!    memo, and the signature into the broadcast structure.
//!
//! The draft is built for a single submission attempt: configure, sign,
//! assemble, broadcast, drop. Nonce reuse across attempts is how replays
//! happen, so there is deliberately no "reset" API.

pub mod builder;
pub mod codec;
pub mod error;

pub use builder::TransactionBuilder;
pub use codec::{sign_bytes, sign_payload, Fee, PubKeyValue, SignPayload, SignatureInfo, SignedEnvelope};
pub use error::TxError;
