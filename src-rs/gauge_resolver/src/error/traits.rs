use std::fmt;

use gauge_ir::{AssociatedQuantity, QuantityIdentity, UnitInstanceName};
use gauge_shared::error::{AsDiagnostic, Context};

/// Represents an error in the traits a quantity declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraitError {
    /// An associated-quantity trait names a quantity outside the population.
    UnknownAssociatedQuantity {
        /// The trait that names the quantity.
        kind: AssociatedQuantity,
        /// The named quantity.
        quantity: QuantityIdentity,
    },
    /// A difference quantity is set while subtraction is not implemented.
    DifferenceDisabled {
        /// The declared difference quantity.
        difference: QuantityIdentity,
    },
    /// A default unit name is declared without a symbol.
    DefaultUnitWithoutSymbol {
        /// The declared unit name.
        name: UnitInstanceName,
    },
    /// A default unit symbol is declared without a name.
    DefaultSymbolWithoutUnit {
        /// The declared symbol.
        symbol: String,
    },
    /// The default unit is not one of the quantity's unit instances.
    DefaultUnitNotIncluded {
        /// The declared unit name.
        name: UnitInstanceName,
    },
}

impl fmt::Display for TraitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAssociatedQuantity { kind, quantity } => {
                write!(f, "{kind} quantity `{quantity}` does not exist")
            }
            Self::DifferenceDisabled { difference } => write!(
                f,
                "difference quantity `{difference}` is set, but differences are not implemented"
            ),
            Self::DefaultUnitWithoutSymbol { name } => {
                write!(f, "default unit `{name}` is declared without a symbol")
            }
            Self::DefaultSymbolWithoutUnit { symbol } => {
                write!(f, "default unit symbol `{symbol}` is declared without a unit")
            }
            Self::DefaultUnitNotIncluded { name } => {
                write!(f, "default unit `{name}` is not an included unit")
            }
        }
    }
}

impl AsDiagnostic for TraitError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownAssociatedQuantity { .. } => "unknown-associated-quantity",
            Self::DifferenceDisabled { .. } => "difference-disabled",
            Self::DefaultUnitWithoutSymbol { .. } => "default-unit-without-symbol",
            Self::DefaultSymbolWithoutUnit { .. } => "default-symbol-without-unit",
            Self::DefaultUnitNotIncluded { .. } => "default-unit-not-included",
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::DifferenceDisabled { .. } => vec![Context::Help(
                "remove the difference quantity or implement differences".to_string(),
            )],
            Self::DefaultUnitWithoutSymbol { .. } | Self::DefaultSymbolWithoutUnit { .. } => {
                vec![Context::Help(
                    "declare both the default unit and its symbol".to_string(),
                )]
            }
            Self::UnknownAssociatedQuantity { .. } | Self::DefaultUnitNotIncluded { .. } => {
                vec![]
            }
        }
    }
}
