//! Fixed-point scaling of decimal amounts into ledger base units.

use alloy_primitives::U256;
use thiserror::Error;

/// Reasons a decimal amount cannot be converted into base units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The amount carries a leading minus sign.
    #[error("amount must not be negative: {0:?}")]
    Negative(String),
    /// The amount is not a plain decimal number.
    #[error("amount is not a decimal number: {0:?}")]
    NotNumeric(String),
    /// The fractional part is finer than one base unit.
    #[error("amount has {found} fractional digits, at most {max} allowed")]
    TooManyDecimals {
        /// Fractional digits present in the input.
        found: usize,
        /// Fractional digits the ledger supports.
        max: u8,
    },
    /// The scaled value does not fit in 256 bits.
    #[error("amount does not fit in a 256-bit integer")]
    Overflow,
}

/// Converts a human-readable decimal such as `"0.05"` into the integer
/// number of base units, scaling by `10^decimals`.
///
/// Accepted text is `digits [ "." digits ]` with at least one digit, after
/// trimming surrounding whitespace. Signs, exponents and separators are
/// rejected, as is any fractional part longer than `decimals` digits.
///
/// # Errors
///
/// Returns an [`AmountError`] describing why the text is not a valid amount.
pub fn parse_units(text: &str, decimals: u8) -> Result<U256, AmountError> {
    let trimmed = text.trim();
    if trimmed.starts_with('-') {
        return Err(AmountError::Negative(trimmed.to_string()));
    }

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return Err(AmountError::NotNumeric(trimmed.to_string()));
    }

    let max = usize::from(decimals);
    if fraction.len() > max {
        return Err(AmountError::TooManyDecimals { found: fraction.len(), max: decimals });
    }

    let padding = std::iter::repeat(b'0').take(max - fraction.len());
    let ten = U256::from(10u8);
    whole.bytes().chain(fraction.bytes()).chain(padding).try_fold(U256::ZERO, |acc, digit| {
        acc.checked_mul(ten)
            .and_then(|scaled| scaled.checked_add(U256::from(digit - b'0')))
            .ok_or(AmountError::Overflow)
    })
}
