//! # Chain Constants
//!
//! Every fixed literal the encoder emits lives here. If you're hardcoding a
//! denom or a key-type tag somewhere else, you're doing it wrong and you owe
//! the team coffee.
//!
//! These values are part of the signing contract: a node re-deriving sign
//! bytes uses the same literals, so changing one here silently invalidates
//! every signature produced afterwards. Treat edits accordingly.

// ---------------------------------------------------------------------------
// Fee & Gas
// ---------------------------------------------------------------------------

/// The fee denomination. BandChain fees are paid in uband (micro-BAND,
/// 10^-6 BAND).
pub const FEE_DENOM: &str = "uband";

/// Default gas limit for a transaction when the caller doesn't set one.
/// Generous enough for a single-message transaction, cheap enough that
/// nobody overpays by default.
pub const DEFAULT_GAS_LIMIT: u64 = 200_000;

/// Default fee amount in uband. Zero — fee markets are the caller's
/// problem, not a default we guess at.
pub const DEFAULT_FEE: u64 = 0;

// ---------------------------------------------------------------------------
// Keys & Signatures
// ---------------------------------------------------------------------------

/// Amino type tag for secp256k1 public keys in the signed envelope.
/// Verifiers dispatch on this string; it is not decorative.
pub const SECP256K1_PUBKEY_TYPE: &str = "tendermint/PubKeySecp256k1";

/// Length of a compressed secp256k1 public key in bytes. Documented for
/// callers; the encoder itself treats keys as opaque blobs.
pub const COMPRESSED_PUBKEY_LENGTH: usize = 33;

// ---------------------------------------------------------------------------
// Oracle Requests
// ---------------------------------------------------------------------------

/// Maximum oracle request calldata size in bytes. Requests above this are
/// rejected by the chain's keeper, so we reject them client-side first.
pub const MAX_CALLDATA_BYTES: usize = 1_024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_wire_contract() {
        // These three literals appear verbatim in signed bytes. If this test
        // fails, every previously produced signature is now invalid.
        assert_eq!(FEE_DENOM, "uband");
        assert_eq!(DEFAULT_GAS_LIMIT, 200_000);
        assert_eq!(DEFAULT_FEE, 0);
    }

    #[test]
    fn pubkey_type_is_the_amino_tag() {
        assert_eq!(SECP256K1_PUBKEY_TYPE, "tendermint/PubKeySecp256k1");
        assert_eq!(COMPRESSED_PUBKEY_LENGTH, 33);
    }

    #[test]
    fn calldata_cap_is_positive() {
        assert!(MAX_CALLDATA_BYTES > 0);
    }
}
