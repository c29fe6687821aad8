use std::fmt;

use gauge_ir::{QuantityIdentity, UnitInstanceName};
use gauge_shared::error::{AsDiagnostic, Context};

/// Represents an error in a declared constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantError {
    /// The constant's unit instance is not in the resolved unit-base set.
    UnitNotIncluded {
        /// The name of the constant.
        constant: String,
        /// The unit instance of the constant.
        unit_instance: UnitInstanceName,
    },
    /// Another constant already uses the name.
    DuplicateName {
        /// The name of the constant.
        constant: String,
        /// The quantity that declared the first constant with the name.
        declared_by: QuantityIdentity,
    },
    /// Another constant already uses the multiples name.
    DuplicateMultiples {
        /// The name of the constant.
        constant: String,
        /// The duplicated multiples name.
        multiples: String,
        /// The quantity that declared the first constant with the multiples name.
        declared_by: QuantityIdentity,
    },
    /// The constant uses the same text for its name and its multiples.
    NameEqualsMultiples {
        /// The name of the constant.
        constant: String,
    },
    /// The constant's name or multiples collides with an included unit.
    SharesNameWithUnit {
        /// The name of the constant.
        constant: String,
        /// The colliding text.
        text: String,
        /// The unit instance whose name or plural form collides.
        unit_instance: UnitInstanceName,
    },
}

impl ConstantError {
    /// Creates a new error indicating a constant unit outside the unit-base set.
    #[must_use]
    pub const fn unit_not_included(constant: String, unit_instance: UnitInstanceName) -> Self {
        Self::UnitNotIncluded {
            constant,
            unit_instance,
        }
    }

    /// Creates a new error indicating a duplicate constant name.
    #[must_use]
    pub const fn duplicate_name(constant: String, declared_by: QuantityIdentity) -> Self {
        Self::DuplicateName {
            constant,
            declared_by,
        }
    }

    /// Creates a new error indicating a duplicate multiples name.
    #[must_use]
    pub const fn duplicate_multiples(
        constant: String,
        multiples: String,
        declared_by: QuantityIdentity,
    ) -> Self {
        Self::DuplicateMultiples {
            constant,
            multiples,
            declared_by,
        }
    }

    /// Creates a new error indicating a constant whose name equals its multiples.
    #[must_use]
    pub const fn name_equals_multiples(constant: String) -> Self {
        Self::NameEqualsMultiples { constant }
    }

    /// Creates a new error indicating a collision with an included unit.
    #[must_use]
    pub const fn shares_name_with_unit(
        constant: String,
        text: String,
        unit_instance: UnitInstanceName,
    ) -> Self {
        Self::SharesNameWithUnit {
            constant,
            text,
            unit_instance,
        }
    }
}

impl fmt::Display for ConstantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitNotIncluded {
                constant,
                unit_instance,
            } => write!(
                f,
                "constant `{constant}` is expressed in `{unit_instance}`, which is not an included unit base"
            ),
            Self::DuplicateName { constant, .. } => {
                write!(f, "a constant named `{constant}` already exists")
            }
            Self::DuplicateMultiples {
                constant,
                multiples,
                ..
            } => write!(
                f,
                "constant `{constant}` uses multiples name `{multiples}`, which is already taken"
            ),
            Self::NameEqualsMultiples { constant } => write!(
                f,
                "constant `{constant}` uses the same name for its multiples"
            ),
            Self::SharesNameWithUnit {
                constant,
                text,
                unit_instance,
            } => write!(
                f,
                "constant `{constant}` uses `{text}`, which is already used by unit `{unit_instance}`"
            ),
        }
    }
}

impl AsDiagnostic for ConstantError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnitNotIncluded { .. } => "constant-unit-not-included",
            Self::DuplicateName { .. } => "duplicate-constant-name",
            Self::DuplicateMultiples { .. } => "duplicate-constant-multiples",
            Self::NameEqualsMultiples { .. } => "constant-name-equals-multiples",
            Self::SharesNameWithUnit { .. } => "constant-shares-name-with-unit",
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::DuplicateName { declared_by, .. }
            | Self::DuplicateMultiples { declared_by, .. } => vec![Context::Note(format!(
                "first declared by `{declared_by}`"
            ))],
            Self::UnitNotIncluded { .. }
            | Self::NameEqualsMultiples { .. }
            | Self::SharesNameWithUnit { .. } => vec![],
        }
    }
}
