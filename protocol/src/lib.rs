// Copyright (c) 2026 Band Protocol contributors. MIT License.
// See LICENSE for details.

//! # band-protocol — Transaction Construction & Canonical Encoding
//!
//! This crate builds BandChain transactions and produces the one thing a
//! remote chain node is completely unforgiving about: the canonical byte
//! sequence that gets signed. Two independent implementations fed the same
//! logical transaction must emit byte-identical output, or signature
//! verification fails and the transaction is rejected at the door.
//!
//! The crate deliberately does *not* sign anything. Key management and the
//! actual secp256k1 ECDSA live elsewhere (hardware wallets, remote signers,
//! other crates). What lives here is the part that has to be exactly right:
//!
//! - **canonical** — The closed value model for wire JSON. Ordered objects,
//!   no floats, no surprises.
//! - **config** — Fixed chain literals as named constants. No magic strings
//!   buried in encoder code.
//! - **msg** — The message capability trait plus the two concrete messages
//!   the client ships (bank transfer, oracle data request).
//! - **tx** — The fluent [`TransactionBuilder`](tx::TransactionBuilder) and
//!   the pure canonical encoder (sign bytes + signed envelope).
//! - **wallet** — A thin public-key wrapper. Bytes in, hex and base64 out.
//!
//! ## The two-phase flow
//!
//! 1. Configure a [`tx::TransactionBuilder`] with messages, account number,
//!    sequence, chain id, fee, gas, and memo.
//! 2. Call [`tx::TransactionBuilder::sign_bytes`] and hand the bytes to an
//!    external signer.
//! 3. Feed the resulting signature and public key to
//!    [`tx::TransactionBuilder::envelope`] and broadcast the JSON it returns.
//!
//! ## Design Philosophy
//!
//! 1. Determinism over convenience — every encoding decision is pinned.
//! 2. Fail fast at configuration time; an encode-time error is a caller bug.
//! 3. Numbers cross the wire as decimal strings. Platforms disagree about
//!    64-bit integers in JSON; strings never do.

pub mod canonical;
pub mod config;
pub mod msg;
pub mod tx;
pub mod wallet;

pub use canonical::CanonicalValue;
pub use msg::{Coin, Msg, MsgRequest, MsgSend, ValidationError};
pub use tx::{SignedEnvelope, TransactionBuilder, TxError};
pub use wallet::PublicKey;
