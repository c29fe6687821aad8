use std::fmt;

use gauge_ir::QuantityIdentity;
use gauge_shared::error::AsDiagnostic;

/// Represents an error in a declared derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivationError {
    /// The derivation signature names a quantity outside the population.
    UnknownQuantity {
        /// The expression of the rejected derivation.
        expression: String,
        /// The unknown quantity.
        quantity: QuantityIdentity,
    },
}

impl fmt::Display for DerivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownQuantity {
                expression,
                quantity,
            } => write!(
                f,
                "derivation `{expression}` refers to quantity `{quantity}`, which does not exist"
            ),
        }
    }
}

impl AsDiagnostic for DerivationError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownQuantity { .. } => "unknown-derivation-quantity",
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }
}
