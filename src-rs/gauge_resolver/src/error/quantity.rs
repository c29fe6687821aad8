use std::fmt;

use gauge_ir::{QuantityIdentity, UnitIdentity};
use gauge_shared::error::{AsDiagnostic, Context};

/// Represents an error that prevents a linked quantity from resolving at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The unit of the base quantity is not in the unit catalog.
    MissingUnit {
        /// The base quantity at the root of the chain.
        base: QuantityIdentity,
        /// The unit the base quantity is declared against.
        unit: UnitIdentity,
    },
}

impl QuantityError {
    /// Creates a new error indicating a missing unit catalog entry.
    #[must_use]
    pub const fn missing_unit(base: QuantityIdentity, unit: UnitIdentity) -> Self {
        Self::MissingUnit { base, unit }
    }
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUnit { unit, .. } => {
                write!(f, "unit `{unit}` is not in the unit catalog")
            }
        }
    }
}

impl AsDiagnostic for QuantityError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingUnit { .. } => "missing-unit",
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::MissingUnit { base, .. } => vec![Context::Note(format!(
                "the unit is declared by base quantity `{base}`"
            ))],
        }
    }
}
