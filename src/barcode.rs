//! QR rendering for payment-request identifiers.
//!
//! The error-correction level is fixed at H so printed or on-screen codes
//! stay scannable when partially obscured.

use image::{ImageEncoder, Luma};
use qrcode::render::{svg, unicode};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

use crate::request::RequestIdentifier;

/// Minimum edge length, in pixels, of SVG and PNG output.
pub const DEFAULT_SIZE: u32 = 200;

/// Error-correction level used for every code.
pub const EC_LEVEL: EcLevel = EcLevel::H;

/// Output encodings for a rendered code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BarcodeFormat {
    /// Unicode half-blocks for terminal display.
    #[default]
    Terminal,
    /// SVG document.
    Svg,
    /// PNG image bytes.
    Png,
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeOptions {
    /// Minimum edge length in pixels (ignored for terminal output).
    pub size: u32,
    /// Draw the blank margin around the symbol.
    pub quiet_zone: bool,
    /// Output encoding.
    pub format: BarcodeFormat,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE, quiet_zone: true, format: BarcodeFormat::Terminal }
    }
}

/// A rendered code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Barcode {
    /// Terminal text.
    Text(String),
    /// SVG markup.
    Svg(String),
    /// Encoded PNG.
    Png(Vec<u8>),
}

impl Barcode {
    /// Raw bytes suitable for writing to a file.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) | Self::Svg(text) => text.as_bytes(),
            Self::Png(bytes) => bytes,
        }
    }
}

/// Rendering failures.
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// The identifier could not be encoded as a QR symbol.
    #[error("QR encoding failed: {0}")]
    Encode(#[from] QrError),
    /// The PNG encoder rejected the image.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Renders `identifier`, or nothing when there is no identifier.
///
/// # Errors
///
/// Returns a [`BarcodeError`] if QR or PNG encoding fails.
pub fn render(
    identifier: Option<&RequestIdentifier>,
    options: &BarcodeOptions,
) -> Result<Option<Barcode>, BarcodeError> {
    let Some(identifier) = identifier else {
        return Ok(None);
    };
    let code = QrCode::with_error_correction_level(identifier.as_str().as_bytes(), EC_LEVEL)?;
    tracing::debug!(
        version = ?code.version(),
        width = code.width(),
        format = ?options.format,
        "rendering payment request"
    );

    let barcode = match options.format {
        BarcodeFormat::Terminal => Barcode::Text(terminal(&code, options)),
        BarcodeFormat::Svg => Barcode::Svg(svg_document(&code, options)),
        BarcodeFormat::Png => Barcode::Png(png(&code, options)?),
    };
    Ok(Some(barcode))
}

fn terminal(code: &QrCode, options: &BarcodeOptions) -> String {
    code.render::<unicode::Dense1x2>()
        .quiet_zone(options.quiet_zone)
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build()
}

fn svg_document(code: &QrCode, options: &BarcodeOptions) -> String {
    code.render::<svg::Color<'_>>()
        .quiet_zone(options.quiet_zone)
        .min_dimensions(options.size, options.size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build()
}

fn png(code: &QrCode, options: &BarcodeOptions) -> Result<Vec<u8>, BarcodeError> {
    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(options.quiet_zone)
        .min_dimensions(options.size, options.size)
        .build();

    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::L8,
    )?;
    Ok(bytes)
}
