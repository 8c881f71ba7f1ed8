//! Canonical encoding: sign bytes and the signed envelope.
//!
//! Both operations are pure functions of the draft with fail-fast
//! precondition checks — there is no state machine here, just "validate,
//! then transform."
//!
//! The sign-byte contract: a flat object with exactly six top-level keys,
//! the top level sorted lexicographically, nested structures left in their
//! stated order, 64-bit quantities as decimal strings, and a minimal
//! whitespace-free UTF-8 JSON rendering with no trailing newline. A chain
//! node re-derives these bytes independently during signature
//! verification, so every one of those clauses is load-bearing.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::canonical::{decimal_string, CanonicalValue};
use crate::config::{FEE_DENOM, SECP256K1_PUBKEY_TYPE};
use crate::msg::Coin;
use crate::wallet::PublicKey;

use super::builder::TransactionBuilder;
use super::error::TxError;

// ---------------------------------------------------------------------------
// Wire structures
// ---------------------------------------------------------------------------

/// The fee block, shared verbatim between sign payload and envelope.
///
/// The chain models fees as a list of coins; this client pins the list to
/// a single uband entry. That is a deliberate simplification of the fee
/// API, not a gap — widening it would change the builder surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Fee coins. Always one uband entry in this client.
    pub amount: Vec<Coin>,
    /// Gas limit as a decimal string.
    #[serde(with = "decimal_string")]
    pub gas: u64,
}

impl Fee {
    fn from_draft(tx: &TransactionBuilder<'_>) -> Self {
        Self {
            amount: vec![Coin::new(tx.fee, FEE_DENOM)],
            gas: tx.gas_limit,
        }
    }

    /// Renders the `{"amount":[...],"gas":"..."}` canonical object.
    fn to_canonical(&self) -> CanonicalValue {
        CanonicalValue::object([
            (
                "amount",
                CanonicalValue::array(self.amount.iter().map(Coin::to_canonical)),
            ),
            ("gas", CanonicalValue::string(self.gas.to_string())),
        ])
    }
}

/// The typed public key entry inside a signature: `{"type": ...,
/// "value": base64}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKeyValue {
    /// Amino key-type tag, e.g. `tendermint/PubKeySecp256k1`.
    #[serde(rename = "type")]
    pub key_type: String,
    /// Base64 of the raw compressed key bytes.
    pub value: String,
}

/// One signature entry in the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureInfo {
    /// Base64 of the raw signature bytes.
    pub signature: String,
    /// The signer's public key.
    pub pub_key: PubKeyValue,
    /// Account number as a decimal string.
    #[serde(with = "decimal_string")]
    pub account_number: u64,
    /// Sequence as a decimal string.
    #[serde(with = "decimal_string")]
    pub sequence: u64,
}

/// The broadcast-ready transaction envelope.
///
/// Field declaration order *is* the wire order: `fee`, `memo`, `msg`,
/// `signatures`. Note the asymmetry with the sign payload — the message
/// list is named `msg` (singular) here and `msgs` there. Both spellings
/// are what verifying nodes expect; do not "fix" either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    pub fee: Fee,
    pub memo: String,
    pub msg: Vec<CanonicalValue>,
    pub signatures: Vec<SignatureInfo>,
}

impl SignedEnvelope {
    /// Renders the envelope as compact JSON bytes for broadcast.
    pub fn to_json_vec(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("envelope serialization is infallible")
    }
}

/// The canonically ordered sign payload.
///
/// Immutable once produced; exists only between "draft is complete" and
/// "bytes are handed to the signer."
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignPayload {
    value: CanonicalValue,
}

impl SignPayload {
    /// The exact bytes to sign.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.to_json_vec()
    }

    /// The ordered payload object, for inspection.
    pub fn as_value(&self) -> &CanonicalValue {
        &self.value
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Builds the canonically ordered sign payload for a draft.
///
/// Preconditions, checked in order, each failing fast:
///
/// 1. at least one message — else [`TxError::EmptyTransaction`]
/// 2. account number set — else `MissingField("account_number")`
/// 3. sequence set — else `MissingField("sequence")`
/// 4. chain id set — else `MissingField("chain_id")`
/// 5. every message validates — its error is propagated unchanged
pub fn sign_payload(tx: &TransactionBuilder<'_>) -> Result<SignPayload, TxError> {
    if tx.msgs.is_empty() {
        return Err(TxError::EmptyTransaction);
    }
    let account_number = tx
        .account_number
        .ok_or(TxError::MissingField("account_number"))?;
    let sequence = tx.sequence.ok_or(TxError::MissingField("sequence"))?;
    let chain_id = tx
        .chain_id
        .as_deref()
        .ok_or(TxError::MissingField("chain_id"))?;

    for msg in &tx.msgs {
        msg.validate()?;
    }

    let mut entries = vec![
        (
            "chain_id".to_string(),
            CanonicalValue::string(chain_id),
        ),
        (
            "account_number".to_string(),
            CanonicalValue::string(account_number.to_string()),
        ),
        ("fee".to_string(), Fee::from_draft(tx).to_canonical()),
        ("memo".to_string(), CanonicalValue::string(tx.memo.clone())),
        (
            "sequence".to_string(),
            CanonicalValue::string(sequence.to_string()),
        ),
        (
            "msgs".to_string(),
            CanonicalValue::array(tx.msgs.iter().map(|m| m.canonical_form())),
        ),
    ];

    // The canonicalization contract: the six top-level keys are sorted
    // lexically; nested structures keep their stated order.
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    tracing::debug!(
        chain_id,
        account_number,
        sequence,
        num_msgs = tx.msgs.len(),
        "sign payload assembled"
    );

    Ok(SignPayload {
        value: CanonicalValue::Object(entries),
    })
}

/// Returns the exact byte sequence to be signed for a draft.
///
/// Deterministic: the same unmodified draft always yields byte-identical
/// output. See [`sign_payload`] for the precondition order.
pub fn sign_bytes(tx: &TransactionBuilder<'_>) -> Result<Vec<u8>, TxError> {
    Ok(sign_payload(tx)?.to_bytes())
}

/// Assembles the broadcast envelope from an externally produced signature.
///
/// `signature` and `pubkey` are opaque blobs: whether the signature
/// actually verifies over the sign bytes is the signer's and the chain's
/// business, not this function's. Only `account_number` and `sequence`
/// are required here — the envelope repeats them next to the signature so
/// verifiers can reconstruct the signed payload.
pub fn envelope(
    tx: &TransactionBuilder<'_>,
    signature: &[u8],
    pubkey: &PublicKey,
) -> Result<SignedEnvelope, TxError> {
    let account_number = tx
        .account_number
        .ok_or(TxError::MissingField("account_number"))?;
    let sequence = tx.sequence.ok_or(TxError::MissingField("sequence"))?;

    tracing::debug!(
        account_number,
        sequence,
        signature_len = signature.len(),
        "assembling signed envelope"
    );

    Ok(SignedEnvelope {
        fee: Fee::from_draft(tx),
        memo: tx.memo.clone(),
        msg: tx.msgs.iter().map(|m| m.canonical_form()).collect(),
        signatures: vec![SignatureInfo {
            signature: BASE64.encode(signature),
            pub_key: PubKeyValue {
                key_type: SECP256K1_PUBKEY_TYPE.to_string(),
                value: pubkey.to_base64(),
            },
            account_number,
            sequence,
        }],
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::{Msg, MsgSend, ValidationError};

    /// Test double: a message with a fixed canonical form and no rules.
    struct RawMsg(CanonicalValue);

    impl Msg for RawMsg {
        fn validate(&self) -> Result<(), ValidationError> {
            Ok(())
        }

        fn canonical_form(&self) -> CanonicalValue {
            self.0.clone()
        }
    }

    /// Test double: a message that always fails validation.
    struct BrokenMsg;

    impl Msg for BrokenMsg {
        fn validate(&self) -> Result<(), ValidationError> {
            Err(ValidationError::EmptyField { field: "payload" })
        }

        fn canonical_form(&self) -> CanonicalValue {
            CanonicalValue::object([("type", CanonicalValue::string("broken"))])
        }
    }

    fn send_msg() -> RawMsg {
        // Insertion order deliberately non-lexical: "type" before "amount".
        RawMsg(CanonicalValue::object([
            ("type", CanonicalValue::string("send")),
            ("amount", CanonicalValue::int(5)),
        ]))
    }

    fn configured<'a>(msg: &'a RawMsg) -> TransactionBuilder<'a> {
        TransactionBuilder::new()
            .with_message(msg)
            .with_account_number(3)
            .unwrap()
            .with_sequence(1)
            .unwrap()
            .with_chain_id("test-chain")
    }

    fn test_pubkey() -> PublicKey {
        PublicKey::from_hex(
            "0260d0487a3dfce9228eee2d0d83a40f6131f551526c8e52066fe7fe1e4a0f193a",
        )
        .unwrap()
    }

    #[test]
    fn sign_bytes_match_the_fixed_vector() {
        let msg = send_msg();
        let bytes = sign_bytes(&configured(&msg)).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"account_number":"3","chain_id":"test-chain","fee":{"amount":[{"amount":"0","denom":"uband"}],"gas":"200000"},"memo":"","msgs":[{"type":"send","amount":5}],"sequence":"1"}"#
        );
    }

    #[test]
    fn sign_bytes_are_deterministic() {
        let msg = send_msg();
        let draft = configured(&msg);
        assert_eq!(sign_bytes(&draft).unwrap(), sign_bytes(&draft).unwrap());
    }

    #[test]
    fn top_level_keys_are_lexically_sorted() {
        let msg = send_msg();
        let payload = sign_payload(&configured(&msg)).unwrap();
        let keys: Vec<_> = payload
            .as_value()
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(
            keys,
            ["account_number", "chain_id", "fee", "memo", "msgs", "sequence"]
        );
    }

    #[test]
    fn configuration_order_does_not_change_bytes() {
        let msg = send_msg();
        // Same fields, opposite configuration order.
        let reordered = TransactionBuilder::new()
            .with_chain_id("test-chain")
            .with_sequence(1)
            .unwrap()
            .with_account_number(3)
            .unwrap()
            .with_message(&msg);
        assert_eq!(
            sign_bytes(&configured(&msg)).unwrap(),
            sign_bytes(&reordered).unwrap()
        );
    }

    #[test]
    fn msgs_keep_insertion_order() {
        let first = RawMsg(CanonicalValue::object([(
            "type",
            CanonicalValue::string("zz-last-alphabetically"),
        )]));
        let second = RawMsg(CanonicalValue::object([(
            "type",
            CanonicalValue::string("aa-first-alphabetically"),
        )]));

        let draft = TransactionBuilder::new()
            .with_messages(&[&first, &second])
            .with_account_number(0)
            .unwrap()
            .with_sequence(0)
            .unwrap()
            .with_chain_id("test-chain");

        let payload = sign_payload(&draft).unwrap();
        let msgs = payload.as_value().get("msgs").unwrap().as_array().unwrap();
        assert_eq!(
            msgs[0].get("type").and_then(|v| v.as_str()),
            Some("zz-last-alphabetically")
        );
        assert_eq!(
            msgs[1].get("type").and_then(|v| v.as_str()),
            Some("aa-first-alphabetically")
        );
    }

    #[test]
    fn empty_draft_fails_before_missing_fields() {
        // No messages and no account number: the message check wins.
        match sign_bytes(&TransactionBuilder::new()) {
            Err(TxError::EmptyTransaction) => {}
            other => panic!("expected EmptyTransaction, got {:?}", other),
        }
    }

    #[test]
    fn missing_fields_fail_in_declaration_order() {
        let msg = send_msg();

        let draft = TransactionBuilder::new().with_message(&msg);
        assert!(matches!(
            sign_bytes(&draft),
            Err(TxError::MissingField("account_number"))
        ));

        let draft = TransactionBuilder::new()
            .with_message(&msg)
            .with_account_number(3)
            .unwrap();
        assert!(matches!(
            sign_bytes(&draft),
            Err(TxError::MissingField("sequence"))
        ));

        let draft = TransactionBuilder::new()
            .with_message(&msg)
            .with_account_number(3)
            .unwrap()
            .with_sequence(1)
            .unwrap();
        assert!(matches!(
            sign_bytes(&draft),
            Err(TxError::MissingField("chain_id"))
        ));
    }

    #[test]
    fn message_validation_errors_propagate_unchanged() {
        let broken = BrokenMsg;
        let draft = TransactionBuilder::new()
            .with_message(&broken)
            .with_account_number(3)
            .unwrap()
            .with_sequence(1)
            .unwrap()
            .with_chain_id("test-chain");

        match sign_bytes(&draft) {
            Err(TxError::Validation(ValidationError::EmptyField { field: "payload" })) => {}
            other => panic!("expected transparent validation error, got {:?}", other),
        }

        // Transparent passthrough: the display text is the message's own.
        let err = sign_bytes(&draft).unwrap_err();
        assert_eq!(err.to_string(), "payload must not be empty");
    }

    #[test]
    fn real_send_message_encodes_end_to_end() {
        let msg = MsgSend::new(
            "band1trx2cm6vm9v63grg9uhmk7sy233zve4q25rgre",
            "band1z9pnyedv6nvh2mcuzcnf6t5rmeqjsy3cskdeg8",
            vec![crate::msg::Coin::uband(100)],
        );
        let draft = TransactionBuilder::new()
            .with_message(&msg)
            .with_account_number(335)
            .unwrap()
            .with_sequence(12)
            .unwrap()
            .with_chain_id("band-guanyu-mainnet");

        let bytes = sign_bytes(&draft).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with(r#"{"account_number":"335","chain_id":"band-guanyu-mainnet""#));
        assert!(text.contains(r#""msgs":[{"type":"cosmos-sdk/MsgSend""#));
        assert!(text.ends_with(r#""sequence":"12"}"#));
    }

    #[test]
    fn envelope_encodes_signature_and_key_as_base64() {
        let msg = send_msg();
        let env = envelope(&configured(&msg), &[0xAB, 0xCD], &test_pubkey()).unwrap();

        let entry = &env.signatures[0];
        assert_eq!(entry.signature, "q80=");
        assert_eq!(entry.pub_key.key_type, "tendermint/PubKeySecp256k1");
        assert_eq!(entry.pub_key.value, BASE64.encode(test_pubkey().as_bytes()));
        assert_eq!(entry.account_number, 3);
        assert_eq!(entry.sequence, 1);
    }

    #[test]
    fn envelope_wire_order_is_fee_memo_msg_signatures() {
        let msg = send_msg();
        let env = envelope(&configured(&msg), &[0xAB, 0xCD], &test_pubkey()).unwrap();
        let json = String::from_utf8(env.to_json_vec()).unwrap();

        let positions: Vec<_> = ["\"fee\":", "\"memo\":", "\"msg\":", "\"signatures\":"]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "envelope fields out of wire order");
    }

    #[test]
    fn envelope_requires_account_number_and_sequence() {
        let msg = send_msg();

        let draft = TransactionBuilder::new().with_message(&msg);
        assert!(matches!(
            envelope(&draft, &[0xAB], &test_pubkey()),
            Err(TxError::MissingField("account_number"))
        ));

        let draft = TransactionBuilder::new()
            .with_message(&msg)
            .with_account_number(3)
            .unwrap();
        assert!(matches!(
            envelope(&draft, &[0xAB], &test_pubkey()),
            Err(TxError::MissingField("sequence"))
        ));
    }

    #[test]
    fn envelope_does_not_require_messages() {
        // getTxData-style leniency: the envelope repeats account data next
        // to the signature; message presence is the sign-byte step's check.
        let draft = TransactionBuilder::new()
            .with_account_number(3)
            .unwrap()
            .with_sequence(1)
            .unwrap();
        let env = envelope(&draft, &[0x01], &test_pubkey()).unwrap();
        assert!(env.msg.is_empty());
    }

    #[test]
    fn envelope_json_roundtrip_is_byte_identical() {
        let msg = send_msg();
        let env = envelope(&configured(&msg), &[0xAB, 0xCD], &test_pubkey()).unwrap();

        let bytes = env.to_json_vec();
        let decoded: SignedEnvelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, env);
        assert_eq!(decoded.to_json_vec(), bytes);
    }

    #[test]
    fn fee_block_is_identical_in_payload_and_envelope() {
        let msg = send_msg();
        let draft = configured(&msg);

        let payload = sign_payload(&draft).unwrap();
        let payload_fee = payload.as_value().get("fee").unwrap().to_json_string();

        let env = envelope(&draft, &[0x01], &test_pubkey()).unwrap();
        let envelope_fee = serde_json::to_string(&env.fee).unwrap();

        assert_eq!(payload_fee, envelope_fee);
    }

    #[test]
    fn custom_fee_and_gas_appear_as_decimal_strings() {
        let msg = send_msg();
        let draft = TransactionBuilder::new()
            .with_message(&msg)
            .with_account_number(3)
            .unwrap()
            .with_sequence(1)
            .unwrap()
            .with_chain_id("test-chain")
            .with_fee(1_000)
            .unwrap()
            .with_gas_limit(350_000)
            .unwrap();

        let text = String::from_utf8(sign_bytes(&draft).unwrap()).unwrap();
        assert!(text
            .contains(r#""fee":{"amount":[{"amount":"1000","denom":"uband"}],"gas":"350000"}"#));
    }
}
