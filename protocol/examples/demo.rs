//! Terminal walkthrough of the two-phase signing flow.
//!
//! Builds a transfer draft, shows the canonical sign bytes, applies a
//! stand-in signature (a real deployment hands the bytes to a hardware
//! wallet or remote signer at that point), and prints the broadcast
//! envelope. Output uses ANSI escape codes for readability.
//!
//! Run with:
//!   cargo run --example demo

use band_protocol::msg::{Coin, MsgSend};
use band_protocol::tx::TransactionBuilder;
use band_protocol::wallet::PublicKey;

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

fn step(n: u8, title: &str) {
    println!();
    println!("{BOLD}{CYAN}[{n}]{RESET} {BOLD}{title}{RESET}");
}

fn main() {
    println!("{BOLD}band-protocol — canonical signing walkthrough{RESET}");

    step(1, "Configure the draft");
    let msg = MsgSend::new(
        "band1trx2cm6vm9v63grg9uhmk7sy233zve4q25rgre",
        "band1z9pnyedv6nvh2mcuzcnf6t5rmeqjsy3cskdeg8",
        vec![Coin::uband(1_000_000)],
    );
    let draft = TransactionBuilder::new()
        .with_message(&msg)
        .with_account_number(335)
        .expect("non-negative account number")
        .with_sequence(12)
        .expect("non-negative sequence")
        .with_chain_id("band-guanyu-mainnet")
        .with_memo("demo transfer");
    println!("  1 message, account 335, sequence 12, chain band-guanyu-mainnet");

    step(2, "Produce canonical sign bytes");
    let sign_bytes = draft.sign_bytes().expect("fully configured draft");
    println!(
        "  {DIM}{}{RESET}",
        String::from_utf8(sign_bytes.clone()).expect("sign bytes are UTF-8 JSON")
    );
    println!("  {GREEN}{} bytes — this exact sequence gets signed{RESET}", sign_bytes.len());

    step(3, "Sign externally");
    // Stand-in signature. This is where a real caller invokes their signer
    // over `sign_bytes` and gets 64 bytes of ECDSA back.
    let signature = vec![0xAB; 64];
    let pubkey = PublicKey::from_hex(
        "0260d0487a3dfce9228eee2d0d83a40f6131f551526c8e52066fe7fe1e4a0f193a",
    )
    .expect("valid hex");
    println!("  {YELLOW}(stubbed — 64 bytes of 0xAB standing in for ECDSA){RESET}");

    step(4, "Assemble the broadcast envelope");
    let envelope = draft
        .envelope(&signature, &pubkey)
        .expect("account number and sequence are set");
    println!(
        "  {DIM}{}{RESET}",
        String::from_utf8(envelope.to_json_vec()).expect("envelope is UTF-8 JSON")
    );

    println!();
    println!("{GREEN}{BOLD}Done.{RESET} Hand the envelope to a broadcaster and drop the draft.");
}
