//! Inclusion and exclusion lists over unit instances.

use std::fmt;

use crate::reference::UnitInstanceName;

/// The two unit-instance relations a quantity declares lists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitRelation {
    /// The unit instances the quantity may be expressed in.
    Units,
    /// The unit instances constants of the quantity may be declared against.
    UnitBases,
}

impl fmt::Display for UnitRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Units => f.write_str("unit"),
            Self::UnitBases => f.write_str("unit base"),
        }
    }
}

/// The inclusion and exclusion lists declared at one level for one relation.
///
/// An empty inclusion list means "no inclusion constraint at this level", in
/// which case the exclusion list applies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnitList {
    inclusions: Vec<UnitInstanceName>,
    exclusions: Vec<UnitInstanceName>,
}

impl UnitList {
    /// Creates a unit list from its inclusions and exclusions, in declaration
    /// order.
    #[must_use]
    pub const fn new(inclusions: Vec<UnitInstanceName>, exclusions: Vec<UnitInstanceName>) -> Self {
        Self {
            inclusions,
            exclusions,
        }
    }

    /// Creates a unit list that only includes the given instances.
    pub fn including(names: impl IntoIterator<Item = UnitInstanceName>) -> Self {
        Self::new(names.into_iter().collect(), Vec::new())
    }

    /// Creates a unit list that only excludes the given instances.
    pub fn excluding(names: impl IntoIterator<Item = UnitInstanceName>) -> Self {
        Self::new(Vec::new(), names.into_iter().collect())
    }

    /// Returns the declared inclusions.
    #[must_use]
    pub fn inclusions(&self) -> &[UnitInstanceName] {
        &self.inclusions
    }

    /// Returns the declared exclusions.
    #[must_use]
    pub fn exclusions(&self) -> &[UnitInstanceName] {
        &self.exclusions
    }

    /// Returns whether neither list names anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inclusions.is_empty() && self.exclusions.is_empty()
    }
}
