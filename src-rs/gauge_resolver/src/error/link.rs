use std::fmt;

use gauge_ir::QuantityIdentity;
use gauge_shared::error::{AsDiagnostic, Context};

/// The state of an original quantity that could not be linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AncestorState {
    /// No quantity with that identity was declared.
    Missing,
    /// The quantity was declared but is not rooted in a base quantity.
    Unlinkable,
}

/// Represents an error that occurred while linking the population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The identity was already declared. The first declaration is kept.
    DuplicateQuantity {
        /// Whether the duplicate declaration is a base quantity.
        duplicate_is_base: bool,
    },
    /// The original quantity is missing or could not itself be linked.
    UnresolvableAncestor {
        /// The original quantity named by the specialization.
        original: QuantityIdentity,
        /// Why the original could not be linked.
        ancestor: AncestorState,
    },
    /// The specialization chain returns to where it started.
    CircularSpecialization {
        /// The quantities forming the cycle, with the first repeated at the end.
        cycle: Vec<QuantityIdentity>,
    },
}

impl LinkError {
    /// Creates a new error indicating a duplicate declaration.
    #[must_use]
    pub const fn duplicate_quantity(duplicate_is_base: bool) -> Self {
        Self::DuplicateQuantity { duplicate_is_base }
    }

    /// Creates a new error indicating an unresolvable original quantity.
    #[must_use]
    pub const fn unresolvable_ancestor(
        original: QuantityIdentity,
        ancestor: AncestorState,
    ) -> Self {
        Self::UnresolvableAncestor { original, ancestor }
    }

    /// Creates a new error indicating a cycle of specializations.
    #[must_use]
    pub const fn circular_specialization(cycle: Vec<QuantityIdentity>) -> Self {
        Self::CircularSpecialization { cycle }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateQuantity { duplicate_is_base } => {
                let kind = if *duplicate_is_base {
                    "base quantity"
                } else {
                    "specialization"
                };
                write!(f, "quantity is declared more than once, ignoring {kind}")
            }
            Self::UnresolvableAncestor {
                original,
                ancestor: AncestorState::Missing,
            } => write!(f, "original quantity `{original}` does not exist"),
            Self::UnresolvableAncestor {
                original,
                ancestor: AncestorState::Unlinkable,
            } => write!(
                f,
                "original quantity `{original}` is not rooted in a base quantity"
            ),
            Self::CircularSpecialization { cycle } => {
                let chain = cycle
                    .iter()
                    .map(QuantityIdentity::as_str)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                write!(f, "circular specialization detected - {chain}")
            }
        }
    }
}

impl AsDiagnostic for LinkError {
    fn code(&self) -> &'static str {
        match self {
            Self::DuplicateQuantity { .. } => "duplicate-quantity",
            Self::UnresolvableAncestor { .. } => "unresolvable-ancestor",
            Self::CircularSpecialization { .. } => "circular-specialization",
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::DuplicateQuantity { .. } => {
                vec![Context::Note("the first declaration is kept".to_string())]
            }
            Self::UnresolvableAncestor { .. } => vec![],
            Self::CircularSpecialization { .. } => vec![Context::Note(
                "every quantity in the cycle is dropped".to_string(),
            )],
        }
    }
}
