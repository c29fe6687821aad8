use std::fmt;

use gauge_ir::{UnitIdentity, UnitInstanceName, UnitRelation};
use gauge_shared::error::{AsDiagnostic, Context};

/// Represents an error in a declared inclusion or exclusion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitListError {
    /// A listed name is not an instance of the quantity's unit.
    UnknownUnitInstance {
        /// The relation the list belongs to.
        relation: UnitRelation,
        /// The listed name.
        name: UnitInstanceName,
        /// The unit of the quantity.
        unit: UnitIdentity,
    },
    /// The same name is listed twice in one list.
    DuplicateListing {
        /// The relation the list belongs to.
        relation: UnitRelation,
        /// The listed name.
        name: UnitInstanceName,
    },
    /// An included name is not in the set inherited from the ancestors.
    InclusionHadNoEffect {
        /// The relation the list belongs to.
        relation: UnitRelation,
        /// The listed name.
        name: UnitInstanceName,
    },
    /// An excluded name is not in the set inherited from the ancestors.
    ExclusionHadNoEffect {
        /// The relation the list belongs to.
        relation: UnitRelation,
        /// The listed name.
        name: UnitInstanceName,
    },
    /// Both lists are declared at one level, so the exclusions are dropped.
    ExclusionsIgnored {
        /// The relation the lists belong to.
        relation: UnitRelation,
    },
}

impl fmt::Display for UnitListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUnitInstance {
                relation,
                name,
                unit,
            } => write!(
                f,
                "listed {relation} `{name}` is not an instance of `{unit}`"
            ),
            Self::DuplicateListing { relation, name } => {
                write!(f, "{relation} `{name}` is listed more than once")
            }
            Self::InclusionHadNoEffect { relation, name } => write!(
                f,
                "including {relation} `{name}` has no effect, as it is not inherited"
            ),
            Self::ExclusionHadNoEffect { relation, name } => write!(
                f,
                "excluding {relation} `{name}` has no effect, as it is not inherited"
            ),
            Self::ExclusionsIgnored { relation } => write!(
                f,
                "both inclusions and exclusions are listed for {relation}s, ignoring the exclusions"
            ),
        }
    }
}

impl AsDiagnostic for UnitListError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownUnitInstance { .. } => "unknown-unit-instance",
            Self::DuplicateListing { .. } => "duplicate-unit-listing",
            Self::InclusionHadNoEffect { .. } => "inclusion-had-no-effect",
            Self::ExclusionHadNoEffect { .. } => "exclusion-had-no-effect",
            Self::ExclusionsIgnored { .. } => "exclusions-ignored",
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InclusionHadNoEffect { .. } => vec![Context::Note(
                "an inclusion can only narrow the inherited set, it cannot re-admit a unit an ancestor removed"
                    .to_string(),
            )],
            Self::ExclusionsIgnored { .. } => vec![Context::Help(
                "declare either inclusions or exclusions for a relation, not both".to_string(),
            )],
            Self::UnknownUnitInstance { .. }
            | Self::DuplicateListing { .. }
            | Self::ExclusionHadNoEffect { .. } => vec![],
        }
    }
}
