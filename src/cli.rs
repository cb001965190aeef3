//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::barcode::BarcodeFormat;

/// Top-level CLI parser for `payqr`.
#[derive(Debug, Parser)]
#[command(
    name = "payqr",
    version,
    about = "Build Ethereum payment requests and show them as QR codes"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// The two form fields, as typed.
#[derive(Debug, Clone, Args)]
pub struct RequestArgs {
    /// Recipient address, e.g. 0xAbC...123.
    #[arg(long)]
    pub address: String,
    /// Amount in ETH, e.g. 0.05.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the payment-request URI.
    Uri(RequestArgs),
    /// Render the payment request as a QR code.
    Qr {
        /// Address and amount.
        #[command(flatten)]
        request: RequestArgs,
        /// Output encoding.
        #[arg(long, value_enum, default_value_t = BarcodeFormat::Terminal)]
        format: BarcodeFormat,
        /// Write to this file instead of stdout (required for PNG).
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Minimum edge length in pixels for SVG and PNG.
        #[arg(long)]
        size: Option<u32>,
        /// Also copy the URI to the clipboard.
        #[arg(long)]
        copy: bool,
    },
    /// Copy the payment-request URI to the clipboard.
    Copy(RequestArgs),
    /// Edit address and amount interactively, redrawing the QR code on every change.
    Form,
}
