use std::fmt;

use gauge_ir::QuantityIdentity;
use gauge_shared::error::{AsDiagnostic, Context};

/// Represents an error in a declared conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The quantity lists itself as a conversion target.
    ConversionToSelf,
    /// The target is not in the linked population.
    UnknownTarget {
        /// The conversion target.
        target: QuantityIdentity,
    },
    /// The target was already listed or inherited.
    Duplicate {
        /// The conversion target.
        target: QuantityIdentity,
        /// The quantity that first listed the target.
        declared_by: QuantityIdentity,
    },
    /// The source and target disagree on whether they use a unit bias.
    BiasMismatch {
        /// The conversion target.
        target: QuantityIdentity,
        /// Whether the source quantity uses a unit bias.
        source_biased: bool,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConversionToSelf => write!(f, "quantity lists itself as a conversion target"),
            Self::UnknownTarget { target } => {
                write!(f, "conversion target `{target}` does not exist")
            }
            Self::Duplicate { target, .. } => {
                write!(f, "conversion to `{target}` is already listed")
            }
            Self::BiasMismatch {
                target,
                source_biased: true,
            } => write!(
                f,
                "conversion target `{target}` does not use a unit bias, but the quantity does"
            ),
            Self::BiasMismatch {
                target,
                source_biased: false,
            } => write!(
                f,
                "conversion target `{target}` uses a unit bias, but the quantity does not"
            ),
        }
    }
}

impl AsDiagnostic for ConversionError {
    fn code(&self) -> &'static str {
        match self {
            Self::ConversionToSelf => "conversion-to-self",
            Self::UnknownTarget { .. } => "unknown-conversion-target",
            Self::Duplicate { .. } => "duplicate-conversion",
            Self::BiasMismatch { .. } => "conversion-bias-mismatch",
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Duplicate { declared_by, .. } => vec![Context::Note(format!(
                "first listed by `{declared_by}`"
            ))],
            Self::ConversionToSelf | Self::UnknownTarget { .. } | Self::BiasMismatch { .. } => {
                vec![]
            }
        }
    }
}
