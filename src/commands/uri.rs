//! `payqr uri` command.

use std::io::Write;

use super::{require_identifier, write_line};
use crate::cli::RequestArgs;

/// Prints the payment-request URI.
///
/// # Errors
///
/// Returns an error string when no identifier can be built or output fails.
pub fn run(args: &RequestArgs, out: &mut dyn Write) -> Result<(), String> {
    let identifier = require_identifier(args)?;
    write_line(out, identifier.as_str())
}
