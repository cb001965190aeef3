//! Core library entry for the `payqr` CLI.
//!
//! `payqr` turns a recipient address and an ETH amount into an EIP-681
//! payment URI (`ethereum:<address>@1?value=<wei>`) and renders it as a QR
//! code that wallets can scan.

pub mod adapters;
pub mod barcode;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod copy;
pub mod form;
pub mod logging;
pub mod ports;
pub mod request;

use clap::Parser;

pub use form::{FormInput, PaymentForm};
pub use request::{build, try_build, RequestError, RequestIdentifier};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            return err.print().map_err(|e| format!("Failed to write output: {e}"));
        }
        Err(err) => return Err(err.to_string()),
    };
    let settings = config::Settings::from_env().map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command, &settings)
}
