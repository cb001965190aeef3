//! `payqr form` command: an interactive payment-request form.
//!
//! Each input line is one edit or action. After every edit the QR region is
//! redrawn from the rebuilt identifier, or replaced by a placeholder while
//! the form is incomplete or invalid.

use std::io::{BufRead, Write};

use super::{current_thread_runtime, write_line};
use crate::barcode::{self, BarcodeFormat, BarcodeOptions};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::copy::copy_to_clipboard;
use crate::form::PaymentForm;

/// Placeholder drawn when there is no identifier.
pub const NO_QR: &str = "(no QR code)";

const HELP: &str = "\
Commands:
  address <text>   set the recipient address
  amount <text>    set the amount in ETH
  copy             copy the payment URI
  clear            empty both fields
  show             print the fields and redraw
  help             show this help
  quit             leave the form";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Replace the address.
    SetAddress(String),
    /// Replace the amount.
    SetAmount(String),
    /// Copy the current URI.
    Copy,
    /// Empty both fields.
    Clear,
    /// Print fields and redraw.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
    /// Blank line.
    Nothing,
}

/// Parses one input line.
///
/// # Errors
///
/// Returns a message naming the unknown command.
pub fn parse_line(line: &str) -> Result<FormAction, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim().to_string();
    match word {
        "" => Ok(FormAction::Nothing),
        "address" => Ok(FormAction::SetAddress(rest)),
        "amount" => Ok(FormAction::SetAmount(rest)),
        "copy" => Ok(FormAction::Copy),
        "clear" => Ok(FormAction::Clear),
        "show" => Ok(FormAction::Show),
        "help" | "?" => Ok(FormAction::Help),
        "quit" | "exit" => Ok(FormAction::Quit),
        other => Err(format!("Unknown command {other:?}; type `help` for the list")),
    }
}

/// Runs the form until `quit` or end of input.
///
/// # Errors
///
/// Returns an error string if input cannot be read, output cannot be
/// written, or the async runtime cannot start.
pub fn run(
    ctx: &ServiceContext,
    settings: &Settings,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), String> {
    let runtime = current_thread_runtime()?;
    let options = BarcodeOptions {
        size: settings.qr_size,
        quiet_zone: settings.quiet_zone,
        format: BarcodeFormat::Terminal,
    };
    let mut form = PaymentForm::new();

    write_line(out, HELP)?;
    draw(&form, &options, out)?;

    let mut line = String::new();
    loop {
        line.clear();
        let read = input.read_line(&mut line).map_err(|e| format!("Failed to read input: {e}"))?;
        if read == 0 {
            break;
        }
        let action = match parse_line(&line) {
            Ok(action) => action,
            Err(message) => {
                write_line(out, &message)?;
                continue;
            }
        };
        match action {
            FormAction::SetAddress(address) => {
                form.set_address(address);
                draw(&form, &options, out)?;
            }
            FormAction::SetAmount(amount) => {
                form.set_amount(amount);
                draw(&form, &options, out)?;
            }
            FormAction::Clear => {
                form.clear();
                draw(&form, &options, out)?;
            }
            FormAction::Show => {
                write_line(out, &format!("address: {}", form.input().address))?;
                write_line(out, &format!("amount:  {}", form.input().amount))?;
                draw(&form, &options, out)?;
            }
            FormAction::Copy => match form.identifier().cloned() {
                Some(identifier) => {
                    runtime.block_on(copy_to_clipboard(
                        &*ctx.clipboard,
                        &*ctx.notifier,
                        identifier.as_str(),
                    ));
                }
                None => write_line(out, "Nothing to copy yet.")?,
            },
            FormAction::Help => write_line(out, HELP)?,
            FormAction::Quit => break,
            FormAction::Nothing => {}
        }
    }
    Ok(())
}

fn draw(form: &PaymentForm, options: &BarcodeOptions, out: &mut dyn Write) -> Result<(), String> {
    match barcode::render(form.identifier(), options) {
        Ok(Some(code)) => {
            write_line(out, &String::from_utf8_lossy(code.as_bytes()))?;
            if let Some(identifier) = form.identifier() {
                write_line(out, identifier.as_str())?;
            }
            write_line(out, "Type `copy` to copy the payment URI.")
        }
        Ok(None) => write_line(out, NO_QR),
        Err(err) => {
            tracing::error!(error = %err, "failed to render QR code");
            write_line(out, NO_QR)
        }
    }
}
