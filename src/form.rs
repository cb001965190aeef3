//! Form state with the derived request identifier kept in step.

use serde::{Deserialize, Serialize};

use crate::request::{self, Network, RequestIdentifier};

/// Raw, unvalidated text of the two form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    /// Recipient address as typed.
    pub address: String,
    /// Amount in display units as typed.
    pub amount: String,
}

/// Owns the form input and the identifier derived from it.
///
/// Every mutator rebuilds the identifier before returning, so
/// [`PaymentForm::identifier`] never reflects an older input.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    network: Network,
    input: FormInput,
    identifier: Option<RequestIdentifier>,
}

impl PaymentForm {
    /// Creates an empty mainnet form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty form targeting `network`.
    #[must_use]
    pub fn with_network(network: Network) -> Self {
        Self { network, ..Self::default() }
    }

    /// Current field text.
    #[must_use]
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Identifier for the current input, if it is complete and valid.
    #[must_use]
    pub fn identifier(&self) -> Option<&RequestIdentifier> {
        self.identifier.as_ref()
    }

    /// Replaces the address and rebuilds.
    pub fn set_address(&mut self, address: impl Into<String>) -> Option<&RequestIdentifier> {
        let input = FormInput { address: address.into(), amount: self.input.amount.clone() };
        self.replace(input)
    }

    /// Replaces the amount and rebuilds.
    pub fn set_amount(&mut self, amount: impl Into<String>) -> Option<&RequestIdentifier> {
        let input = FormInput { address: self.input.address.clone(), amount: amount.into() };
        self.replace(input)
    }

    /// Swaps in a whole new input and rebuilds.
    pub fn replace(&mut self, input: FormInput) -> Option<&RequestIdentifier> {
        self.input = input;
        self.recompute();
        self.identifier()
    }

    /// Empties both fields.
    pub fn clear(&mut self) {
        self.replace(FormInput::default());
    }

    fn recompute(&mut self) {
        self.identifier =
            request::build_for(&self.network, &self.input.address, &self.input.amount);
    }
}
