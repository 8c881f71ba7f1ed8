// Copyright (c) 2026 Band Protocol contributors. MIT License.
// See LICENSE for details.

//! # band-cli
//!
//! Entry point for the `band-cli` binary. Parses CLI arguments, initializes
//! logging, builds the requested transaction, and prints either the
//! canonical sign bytes (phase one) or the signed broadcast envelope
//! (phase two) to stdout.
//!
//! The binary supports three subcommands:
//!
//! - `send`    — build a single-transfer transaction
//! - `request` — build a single oracle data request transaction
//! - `version` — print build version information
//!
//! The intended round trip:
//!
//! ```text
//! band-cli send --chain-id ... --account-number 335 --sequence 12 \
//!     --from band1... --to band1... --amount 1000000 > sign_bytes.json
//! # sign sign_bytes.json with your signer of choice, then:
//! band-cli send ...same flags... --signature <hex> --pubkey <hex>
//! ```

mod cli;
mod logging;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use band_protocol::msg::{Coin, Msg, MsgRequest, MsgSend};
use band_protocol::tx::TransactionBuilder;
use band_protocol::wallet::PublicKey;

use cli::{BandCli, Commands, RequestArgs, SendArgs, TxArgs};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = BandCli::parse();
    logging::init_logging(
        "band_cli=info,band_protocol=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    match cli.command {
        Commands::Send(args) => run_send(args),
        Commands::Request(args) => run_request(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds and emits a transfer transaction.
fn run_send(args: SendArgs) -> Result<()> {
    let msg = MsgSend::new(
        args.from.clone(),
        args.to.clone(),
        vec![Coin::new(args.amount, args.denom.clone())],
    );
    tracing::info!(from = %args.from, to = %args.to, amount = args.amount, "building transfer");
    emit(&msg, &args.tx)
}

/// Builds and emits an oracle request transaction.
fn run_request(args: RequestArgs) -> Result<()> {
    let calldata = hex::decode(&args.calldata).context("calldata is not valid hex")?;
    let msg = MsgRequest::new(args.oracle_script_id, calldata, args.ask_count, args.min_count)
        .with_client_id(args.client_id.clone())
        .with_sender(args.sender.clone());
    tracing::info!(
        oracle_script_id = args.oracle_script_id,
        ask_count = args.ask_count,
        min_count = args.min_count,
        "building oracle request"
    );
    emit(&msg, &args.tx)
}

/// Configures the draft from the shared flags and prints the requested
/// artifact: sign bytes, or — when a signature and public key were
/// supplied — the broadcast envelope.
fn emit(msg: &dyn Msg, tx: &TxArgs) -> Result<()> {
    let draft = TransactionBuilder::new()
        .with_message(msg)
        .with_account_number(tx.account_number)?
        .with_sequence(tx.sequence)?
        .with_chain_id(tx.chain_id.as_str())
        .with_fee(tx.fee)?
        .with_gas_limit(tx.gas)?
        .with_memo(tx.memo.as_str());

    match (&tx.signature, &tx.pubkey) {
        (Some(signature_hex), Some(pubkey_hex)) => {
            let signature = hex::decode(signature_hex).context("signature is not valid hex")?;
            let pubkey = PublicKey::from_hex(pubkey_hex).context("pubkey is not valid hex")?;
            let envelope = draft.envelope(&signature, &pubkey)?;
            println!(
                "{}",
                String::from_utf8(envelope.to_json_vec())
                    .context("envelope is not valid UTF-8")?
            );
            tracing::info!("envelope written to stdout");
        }
        _ => {
            // clap enforces that the two flags travel together, so anything
            // else means phase one. The bytes go out exactly as produced —
            // no trailing newline, because stdout *is* the signing input.
            let sign_bytes = draft.sign_bytes()?;
            io::stdout()
                .write_all(&sign_bytes)
                .context("failed to write sign bytes to stdout")?;
            tracing::info!("sign bytes written to stdout; sign them and re-run with --signature/--pubkey");
        }
    }
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("band-cli {}", env!("CARGO_PKG_VERSION"));
}
