//! Bank transfer message.
//!
//! The simplest chain operation: move coins from one address to another.
//! Canonical type tag `cosmos-sdk/MsgSend`, value keys in lexical order
//! (`amount`, `from_address`, `to_address`) — the order verifying nodes
//! re-derive, so it is part of the signing contract.

use crate::canonical::CanonicalValue;

use super::{Coin, Msg, ValidationError};

/// A token transfer from `from_address` to `to_address`.
///
/// Addresses are carried as opaque bech32 strings; the chain, not this
/// client, is the authority on address validity. Local validation only
/// rejects the states that can never be right: empty addresses, an empty
/// coin list, and zero-value coins.
///
/// # Examples
///
/// ```
/// use band_protocol::msg::{Coin, Msg, MsgSend};
///
/// let msg = MsgSend::new(
///     "band1trx2cm6vm9v63grg9uhmk7sy233zve4q25rgre",
///     "band1z9pnyedv6nvh2mcuzcnf6t5rmeqjsy3cskdeg8",
///     vec![Coin::uband(100)],
/// );
/// assert!(msg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgSend {
    /// Sender address (bech32).
    pub from_address: String,
    /// Recipient address (bech32).
    pub to_address: String,
    /// Coins to transfer. Must contain at least one positive-amount coin.
    pub amount: Vec<Coin>,
}

impl MsgSend {
    /// Creates a new transfer message.
    pub fn new(
        from_address: impl Into<String>,
        to_address: impl Into<String>,
        amount: Vec<Coin>,
    ) -> Self {
        Self {
            from_address: from_address.into(),
            to_address: to_address.into(),
            amount,
        }
    }
}

impl Msg for MsgSend {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.from_address.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "from_address",
            });
        }
        if self.to_address.is_empty() {
            return Err(ValidationError::EmptyField { field: "to_address" });
        }
        if self.amount.is_empty() {
            return Err(ValidationError::EmptyField { field: "amount" });
        }
        for coin in &self.amount {
            if coin.amount == 0 {
                return Err(ValidationError::ZeroCoin {
                    denom: coin.denom.clone(),
                });
            }
        }
        Ok(())
    }

    fn canonical_form(&self) -> CanonicalValue {
        CanonicalValue::object([
            ("type", CanonicalValue::string("cosmos-sdk/MsgSend")),
            (
                "value",
                CanonicalValue::object([
                    (
                        "amount",
                        CanonicalValue::array(self.amount.iter().map(Coin::to_canonical)),
                    ),
                    (
                        "from_address",
                        CanonicalValue::string(self.from_address.clone()),
                    ),
                    (
                        "to_address",
                        CanonicalValue::string(self.to_address.clone()),
                    ),
                ]),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MsgSend {
        MsgSend::new("band1from", "band1to", vec![Coin::uband(10)])
    }

    #[test]
    fn valid_send_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn canonical_form_has_lexical_value_keys() {
        let json = sample().canonical_form().to_json_string();
        assert_eq!(
            json,
            r#"{"type":"cosmos-sdk/MsgSend","value":{"amount":[{"amount":"10","denom":"uband"}],"from_address":"band1from","to_address":"band1to"}}"#
        );
    }

    #[test]
    fn rejects_empty_from_address() {
        let msg = MsgSend::new("", "band1to", vec![Coin::uband(10)]);
        match msg.validate() {
            Err(ValidationError::EmptyField {
                field: "from_address",
            }) => {}
            other => panic!("expected EmptyField(from_address), got {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_to_address() {
        let msg = MsgSend::new("band1from", "", vec![Coin::uband(10)]);
        match msg.validate() {
            Err(ValidationError::EmptyField { field: "to_address" }) => {}
            other => panic!("expected EmptyField(to_address), got {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_coin_list() {
        let msg = MsgSend::new("band1from", "band1to", vec![]);
        match msg.validate() {
            Err(ValidationError::EmptyField { field: "amount" }) => {}
            other => panic!("expected EmptyField(amount), got {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_coin() {
        let msg = MsgSend::new("band1from", "band1to", vec![Coin::uband(0)]);
        match msg.validate() {
            Err(ValidationError::ZeroCoin { denom }) => assert_eq!(denom, "uband"),
            other => panic!("expected ZeroCoin, got {:?}", other),
        }
    }

    #[test]
    fn multi_coin_transfers_preserve_order() {
        let msg = MsgSend::new(
            "band1from",
            "band1to",
            vec![Coin::new(5, "uband"), Coin::new(7, "uatom")],
        );
        let form = msg.canonical_form();
        let coins = form.get("value").and_then(|v| v.get("amount")).unwrap();
        let rendered = coins.to_json_string();
        assert_eq!(
            rendered,
            r#"[{"amount":"5","denom":"uband"},{"amount":"7","denom":"uatom"}]"#
        );
    }
}
