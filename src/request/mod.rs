//! Payment-request identifier construction.
//!
//! A request identifier follows the EIP-681 transfer grammar
//! `ethereum:<address>@<chain_id>?value=<base_units>`. It is built
//! all-or-nothing from raw form text: either every placeholder is filled
//! with validated data or no identifier exists at all.

pub mod amount;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub use amount::{parse_units, AmountError};

/// Ledger parameters that shape the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    /// URI scheme understood by wallets.
    pub scheme: &'static str,
    /// Numeric chain identifier placed after `@`.
    pub chain_id: u64,
    /// Decimal exponent between the display unit and the base unit.
    pub decimals: u8,
}

/// Ethereum mainnet: chain 1, amounts in ether scaled to wei.
pub const MAINNET: Network = Network { scheme: "ethereum", chain_id: 1, decimals: 18 };

impl Default for Network {
    fn default() -> Self {
        MAINNET
    }
}

/// A fully built payment-request identifier.
///
/// Only the builder functions in this module can create one, so holding a
/// value guarantees the string is complete and well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestIdentifier(String);

impl RequestIdentifier {
    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RequestIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Form field left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// Recipient address.
    Address,
    /// Amount to request.
    Amount,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => f.write_str("address"),
            Self::Amount => f.write_str("amount"),
        }
    }
}

/// Why no identifier could be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// A required field is still empty.
    #[error("{0} is required")]
    Incomplete(MissingField),
    /// The amount failed base-unit scaling.
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
}

/// Builds the identifier for `network`, reporting why it could not be built.
///
/// The address is used verbatim; only emptiness is checked. An amount of
/// nothing but whitespace counts as empty.
///
/// # Errors
///
/// Returns [`RequestError::Incomplete`] when either input is empty and
/// [`RequestError::InvalidAmount`] when the amount cannot be scaled.
pub fn try_build_for(
    network: &Network,
    address: &str,
    amount: &str,
) -> Result<RequestIdentifier, RequestError> {
    if address.is_empty() {
        return Err(RequestError::Incomplete(MissingField::Address));
    }
    if amount.trim().is_empty() {
        return Err(RequestError::Incomplete(MissingField::Amount));
    }
    let value = parse_units(amount, network.decimals)?;
    Ok(RequestIdentifier(format!(
        "{scheme}:{address}@{chain_id}?value={value}",
        scheme = network.scheme,
        chain_id = network.chain_id,
    )))
}

/// Builds the mainnet identifier, reporting why it could not be built.
///
/// # Errors
///
/// See [`try_build_for`].
pub fn try_build(address: &str, amount: &str) -> Result<RequestIdentifier, RequestError> {
    try_build_for(&MAINNET, address, amount)
}

/// Builds the identifier for `network`, or nothing.
///
/// Incomplete input yields `None` quietly. An amount that fails scaling is
/// logged at error level and also yields `None`.
#[must_use]
pub fn build_for(network: &Network, address: &str, amount: &str) -> Option<RequestIdentifier> {
    match try_build_for(network, address, amount) {
        Ok(identifier) => Some(identifier),
        Err(RequestError::Incomplete(field)) => {
            tracing::trace!(%field, "payment request incomplete");
            None
        }
        Err(err) => {
            tracing::error!(error = %err, amount, "error generating payment request");
            None
        }
    }
}

/// Builds the mainnet identifier, or nothing.
#[must_use]
pub fn build(address: &str, amount: &str) -> Option<RequestIdentifier> {
    build_for(&MAINNET, address, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0xAbC0000000000000000000000000000000000123";

    #[test]
    fn builds_mainnet_identifier() {
        let id = build(ADDRESS, "0.0001").unwrap();
        assert_eq!(id.as_str(), format!("ethereum:{ADDRESS}@1?value=100000000000000"));
    }

    #[test]
    fn whole_amount_has_no_decimal_point() {
        let id = build("0x1", "2").unwrap();
        assert_eq!(id.to_string(), "ethereum:0x1@1?value=2000000000000000000");
    }

    #[test]
    fn address_is_used_verbatim() {
        let id = build("vitalik.eth", "1").unwrap();
        assert!(id.as_str().starts_with("ethereum:vitalik.eth@1?"));
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(build(ADDRESS, "").is_none());
        assert!(build("", "1").is_none());
        assert!(build("", "").is_none());
        assert_eq!(try_build("", "1"), Err(RequestError::Incomplete(MissingField::Address)));
        assert_eq!(try_build(ADDRESS, ""), Err(RequestError::Incomplete(MissingField::Amount)));
    }

    #[test]
    fn blank_amount_is_incomplete_not_invalid() {
        assert!(build(ADDRESS, "   ").is_none());
        assert_eq!(try_build(ADDRESS, " \t "), Err(RequestError::Incomplete(MissingField::Amount)));
    }

    #[test]
    fn excess_precision_yields_nothing() {
        assert!(build(ADDRESS, "12.3456789012345678901").is_none());
        assert!(matches!(
            try_build(ADDRESS, "12.3456789012345678901"),
            Err(RequestError::InvalidAmount(AmountError::TooManyDecimals { found: 19, max: 18 }))
        ));
    }

    #[test]
    fn negative_amount_yields_nothing() {
        assert!(build(ADDRESS, "-1.0").is_none());
        assert!(matches!(
            try_build(ADDRESS, "-1.0"),
            Err(RequestError::InvalidAmount(AmountError::Negative(_)))
        ));
    }

    #[test]
    fn building_is_idempotent() {
        assert_eq!(build(ADDRESS, "0.05"), build(ADDRESS, "0.05"));
        assert_eq!(build(ADDRESS, "oops"), build(ADDRESS, "oops"));
    }

    #[test]
    fn custom_network_changes_chain_and_scale() {
        let network = Network { scheme: "ethereum", chain_id: 137, decimals: 6 };
        let id = build_for(&network, "0x1", "1.5").unwrap();
        assert_eq!(id.as_str(), "ethereum:0x1@137?value=1500000");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = build("0x1", "1").unwrap();
        assert_eq!(
            serde_json::to_value(&id).unwrap(),
            serde_json::json!("ethereum:0x1@1?value=1000000000000000000")
        );
    }
}
