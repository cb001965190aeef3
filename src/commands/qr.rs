//! `payqr qr` command.

use std::io::Write;
use std::path::Path;

use super::{block_on, require_identifier, write_line};
use crate::barcode::{self, Barcode, BarcodeFormat, BarcodeOptions};
use crate::cli::RequestArgs;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::copy::copy_to_clipboard;

/// Rendering choices for one `qr` invocation.
#[derive(Debug, Clone, Copy)]
pub struct QrRequest<'a> {
    /// Output encoding.
    pub format: BarcodeFormat,
    /// Destination file; stdout when absent.
    pub output: Option<&'a Path>,
    /// Size override for SVG and PNG.
    pub size: Option<u32>,
    /// Copy the URI after rendering.
    pub copy: bool,
}

/// Renders the payment request and optionally copies its URI.
///
/// A failed copy is reported through the notifier and does not fail the command.
///
/// # Errors
///
/// Returns an error string when no identifier can be built, PNG output has
/// no destination, rendering fails, or output cannot be written.
pub fn run(
    ctx: &ServiceContext,
    settings: &Settings,
    args: &RequestArgs,
    request: &QrRequest<'_>,
    out: &mut dyn Write,
) -> Result<(), String> {
    if request.format == BarcodeFormat::Png && request.output.is_none() {
        return Err("PNG output requires --output <FILE>".to_string());
    }
    let identifier = require_identifier(args)?;
    let options = BarcodeOptions {
        size: request.size.unwrap_or(settings.qr_size),
        quiet_zone: settings.quiet_zone,
        format: request.format,
    };
    let barcode = barcode::render(Some(&identifier), &options)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "QR renderer produced no output".to_string())?;

    match (request.output, &barcode) {
        (Some(path), Barcode::Png(bytes)) => {
            ctx.fs
                .write_bytes(path, bytes)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            write_line(out, &format!("Wrote {}", path.display()))?;
        }
        (Some(path), Barcode::Text(text) | Barcode::Svg(text)) => {
            ctx.fs
                .write(path, text)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            write_line(out, &format!("Wrote {}", path.display()))?;
        }
        (None, Barcode::Text(art)) => {
            write_line(out, art)?;
            write_line(out, identifier.as_str())?;
        }
        (None, Barcode::Svg(svg)) => write_line(out, svg)?,
        (None, Barcode::Png(_)) => return Err("PNG output requires --output <FILE>".to_string()),
    }

    if request.copy {
        block_on(copy_to_clipboard(&*ctx.clipboard, &*ctx.notifier, identifier.as_str()))?;
    }
    Ok(())
}
