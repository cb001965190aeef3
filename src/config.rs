//! Runtime settings read from the environment.
//!
//! An optional `.env` file in the working directory is loaded first, so
//! values there behave like exported variables.

use std::path::PathBuf;

use thiserror::Error;

use crate::barcode::DEFAULT_SIZE;

/// Minimum QR edge length in pixels.
pub const QR_SIZE_VAR: &str = "PAYQR_QR_SIZE";
/// Whether to draw the quiet zone.
pub const QUIET_ZONE_VAR: &str = "PAYQR_QUIET_ZONE";
/// Shell command that receives clipboard text on stdin.
pub const CLIPBOARD_CMD_VAR: &str = "PAYQR_CLIPBOARD_CMD";
/// Directory that receives recorded cassettes.
pub const RECORD_VAR: &str = "PAYQR_RECORD";

/// A variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The value did not parse.
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Human description of accepted values.
        expected: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Minimum QR edge length for SVG and PNG output.
    pub qr_size: u32,
    /// Draw the quiet zone around QR codes.
    pub quiet_zone: bool,
    /// Custom clipboard command; platform tools are used when unset.
    pub clipboard_command: Option<String>,
    /// Record port interactions into this directory when set.
    pub record_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { qr_size: DEFAULT_SIZE, quiet_zone: true, clipboard_command: None, record_dir: None }
    }
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds settings from an arbitrary variable source.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Self::default();

        if let Some(value) = get(QR_SIZE_VAR) {
            settings.qr_size = value.parse::<u32>().ok().filter(|size| *size > 0).ok_or(
                ConfigError::Invalid { var: QR_SIZE_VAR, expected: "a positive integer", value },
            )?;
        }
        if let Some(value) = get(QUIET_ZONE_VAR) {
            settings.quiet_zone = parse_bool(&value).ok_or(ConfigError::Invalid {
                var: QUIET_ZONE_VAR,
                expected: "true or false",
                value,
            })?;
        }
        settings.clipboard_command = get(CLIPBOARD_CMD_VAR);
        settings.record_dir = get(RECORD_VAR).map(PathBuf::from);
        Ok(settings)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
