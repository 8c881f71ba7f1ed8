//! # CLI Interface
//!
//! Defines the command-line argument structure for `band-cli` using
//! `clap` derive. Supports three subcommands: `send`, `request`, and
//! `version`.

use clap::{Args, Parser, Subcommand};

/// BandChain transaction CLI.
///
/// Builds transactions, prints the canonical bytes an external signer must
/// sign, and — given the resulting signature — assembles the broadcast
/// envelope. Never touches key material and never talks to the network:
/// stdout carries the artifact, stderr carries the logs.
#[derive(Parser, Debug)]
#[command(
    name = "band-cli",
    about = "BandChain transaction construction and canonical encoding",
    version,
    propagate_version = true
)]
pub struct BandCli {
    /// Log output format: "pretty" or "json".
    #[arg(long, global = true, env = "BAND_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the band-cli binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a single-transfer transaction.
    Send(SendArgs),
    /// Build a single oracle data request transaction.
    Request(RequestArgs),
    /// Print version information and exit.
    Version,
}

/// Transaction-level flags shared by every message subcommand.
///
/// Without `--signature`/`--pubkey` the command prints sign bytes (phase
/// one); with both it prints the signed envelope (phase two).
#[derive(Args, Debug)]
pub struct TxArgs {
    /// Chain identifier, e.g. "band-guanyu-mainnet".
    #[arg(long, env = "BAND_CHAIN_ID")]
    pub chain_id: String,

    /// Account number of the signing account.
    #[arg(long)]
    pub account_number: i64,

    /// Sequence (nonce) of the signing account.
    #[arg(long)]
    pub sequence: i64,

    /// Fee in uband.
    #[arg(long, default_value_t = 0)]
    pub fee: i64,

    /// Gas limit.
    #[arg(long, default_value_t = 200_000)]
    pub gas: i64,

    /// Free-text memo.
    #[arg(long, default_value = "")]
    pub memo: String,

    /// Hex-encoded signature over the sign bytes. Switches output from
    /// sign bytes to the broadcast envelope.
    #[arg(long, requires = "pubkey")]
    pub signature: Option<String>,

    /// Hex-encoded compressed secp256k1 public key of the signer.
    #[arg(long, requires = "signature")]
    pub pubkey: Option<String>,
}

/// Arguments for the `send` subcommand.
#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub tx: TxArgs,

    /// Sender address (bech32).
    #[arg(long)]
    pub from: String,

    /// Recipient address (bech32).
    #[arg(long)]
    pub to: String,

    /// Transfer amount in the smallest unit of --denom.
    #[arg(long)]
    pub amount: u64,

    /// Denomination of the transferred coins.
    #[arg(long, default_value = "uband")]
    pub denom: String,
}

/// Arguments for the `request` subcommand.
#[derive(Args, Debug)]
pub struct RequestArgs {
    #[command(flatten)]
    pub tx: TxArgs,

    /// Oracle script to execute.
    #[arg(long)]
    pub oracle_script_id: u64,

    /// Hex-encoded calldata for the oracle script.
    #[arg(long, default_value = "")]
    pub calldata: String,

    /// Number of validators asked to serve the request.
    #[arg(long)]
    pub ask_count: u64,

    /// Number of reports required for the request to resolve.
    #[arg(long)]
    pub min_count: u64,

    /// Client identifier echoed back in the oracle result.
    #[arg(long, default_value = "")]
    pub client_id: String,

    /// Requesting address (bech32).
    #[arg(long)]
    pub sender: String,
}
