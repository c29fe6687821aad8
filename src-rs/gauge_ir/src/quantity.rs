//! Declared quantities: bases and specializations.
//!
//! A quantity is either a *base*, declared directly against a unit of
//! measure, or a *specialization* of another quantity. Specializations may
//! specialize other specializations, so a quantity sits at the bottom of a
//! chain that always ends in exactly one base.

use crate::{
    items::{Constant, Conversion, Derivation},
    reference::{QuantityIdentity, UnitIdentity},
    traits::TraitSet,
    unit_list::{UnitList, UnitRelation},
};

/// Everything a quantity declares about itself, without anything it may
/// inherit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuantityDeclarations {
    traits: TraitSet,
    derivations: Vec<Derivation>,
    constants: Vec<Constant>,
    conversions: Vec<Conversion>,
    units: UnitList,
    unit_bases: UnitList,
}

impl QuantityDeclarations {
    /// Creates an empty set of declarations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declared traits.
    #[must_use]
    pub fn with_traits(mut self, traits: TraitSet) -> Self {
        self.traits = traits;
        self
    }

    /// Sets the declared derivations.
    #[must_use]
    pub fn with_derivations(mut self, derivations: Vec<Derivation>) -> Self {
        self.derivations = derivations;
        self
    }

    /// Sets the declared constants.
    #[must_use]
    pub fn with_constants(mut self, constants: Vec<Constant>) -> Self {
        self.constants = constants;
        self
    }

    /// Sets the declared conversions.
    #[must_use]
    pub fn with_conversions(mut self, conversions: Vec<Conversion>) -> Self {
        self.conversions = conversions;
        self
    }

    /// Sets the inclusion and exclusion lists for one unit relation.
    #[must_use]
    pub fn with_unit_list(mut self, relation: UnitRelation, list: UnitList) -> Self {
        match relation {
            UnitRelation::Units => self.units = list,
            UnitRelation::UnitBases => self.unit_bases = list,
        }
        self
    }

    /// Returns the declared traits.
    #[must_use]
    pub const fn traits(&self) -> &TraitSet {
        &self.traits
    }

    /// Returns the declared derivations.
    #[must_use]
    pub fn derivations(&self) -> &[Derivation] {
        &self.derivations
    }

    /// Returns the declared constants.
    #[must_use]
    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    /// Returns the declared conversions.
    #[must_use]
    pub fn conversions(&self) -> &[Conversion] {
        &self.conversions
    }

    /// Returns the inclusion and exclusion lists for one unit relation.
    #[must_use]
    pub const fn unit_list(&self, relation: UnitRelation) -> &UnitList {
        match relation {
            UnitRelation::Units => &self.units,
            UnitRelation::UnitBases => &self.unit_bases,
        }
    }
}

/// A quantity declared directly against a unit of measure.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityBase {
    identity: QuantityIdentity,
    unit: UnitIdentity,
    use_unit_bias: bool,
    declarations: QuantityDeclarations,
}

impl QuantityBase {
    /// Creates a base quantity with no declarations that does not use a unit
    /// bias.
    #[must_use]
    pub fn new(identity: QuantityIdentity, unit: UnitIdentity) -> Self {
        Self {
            identity,
            unit,
            use_unit_bias: false,
            declarations: QuantityDeclarations::new(),
        }
    }

    /// Sets whether the quantity uses a unit bias, as temperatures do.
    #[must_use]
    pub const fn with_unit_bias(mut self, use_unit_bias: bool) -> Self {
        self.use_unit_bias = use_unit_bias;
        self
    }

    /// Sets the declarations of the quantity.
    #[must_use]
    pub fn with_declarations(mut self, declarations: QuantityDeclarations) -> Self {
        self.declarations = declarations;
        self
    }

    /// Returns the identity of the quantity.
    #[must_use]
    pub const fn identity(&self) -> &QuantityIdentity {
        &self.identity
    }

    /// Returns the unit of measure the quantity is declared against.
    #[must_use]
    pub const fn unit(&self) -> &UnitIdentity {
        &self.unit
    }

    /// Returns whether the quantity uses a unit bias.
    #[must_use]
    pub const fn use_unit_bias(&self) -> bool {
        self.use_unit_bias
    }

    /// Returns the declarations of the quantity.
    #[must_use]
    pub const fn declarations(&self) -> &QuantityDeclarations {
        &self.declarations
    }
}

/// Which properties a specialization inherits from its original quantity.
///
/// Everything is inherited unless turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent switch declared by the user"
)]
pub struct Inheritance {
    derivations: bool,
    constants: bool,
    conversions: bool,
    units: bool,
    unit_bases: bool,
}

impl Inheritance {
    /// Inherits everything.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            derivations: true,
            constants: true,
            conversions: true,
            units: true,
            unit_bases: true,
        }
    }

    /// Inherits nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            derivations: false,
            constants: false,
            conversions: false,
            units: false,
            unit_bases: false,
        }
    }

    /// Sets whether derivations are inherited.
    #[must_use]
    pub const fn with_derivations(mut self, inherit: bool) -> Self {
        self.derivations = inherit;
        self
    }

    /// Sets whether constants are inherited.
    #[must_use]
    pub const fn with_constants(mut self, inherit: bool) -> Self {
        self.constants = inherit;
        self
    }

    /// Sets whether conversions are inherited.
    #[must_use]
    pub const fn with_conversions(mut self, inherit: bool) -> Self {
        self.conversions = inherit;
        self
    }

    /// Sets whether the unit-instance set of a relation is inherited.
    #[must_use]
    pub const fn with_unit_relation(mut self, relation: UnitRelation, inherit: bool) -> Self {
        match relation {
            UnitRelation::Units => self.units = inherit,
            UnitRelation::UnitBases => self.unit_bases = inherit,
        }
        self
    }

    /// Returns whether derivations are inherited.
    #[must_use]
    pub const fn derivations(&self) -> bool {
        self.derivations
    }

    /// Returns whether constants are inherited.
    #[must_use]
    pub const fn constants(&self) -> bool {
        self.constants
    }

    /// Returns whether conversions are inherited.
    #[must_use]
    pub const fn conversions(&self) -> bool {
        self.conversions
    }

    /// Returns whether the unit-instance set of a relation is inherited.
    #[must_use]
    pub const fn unit_relation(&self, relation: UnitRelation) -> bool {
        match relation {
            UnitRelation::Units => self.units,
            UnitRelation::UnitBases => self.unit_bases,
        }
    }
}

impl Default for Inheritance {
    fn default() -> Self {
        Self::all()
    }
}

/// A quantity declared as a refinement of another quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantitySpecialization {
    identity: QuantityIdentity,
    original: QuantityIdentity,
    inheritance: Inheritance,
    declarations: QuantityDeclarations,
}

impl QuantitySpecialization {
    /// Creates a specialization of `original` that inherits everything and
    /// declares nothing of its own.
    #[must_use]
    pub fn new(identity: QuantityIdentity, original: QuantityIdentity) -> Self {
        Self {
            identity,
            original,
            inheritance: Inheritance::all(),
            declarations: QuantityDeclarations::new(),
        }
    }

    /// Sets which properties are inherited.
    #[must_use]
    pub const fn with_inheritance(mut self, inheritance: Inheritance) -> Self {
        self.inheritance = inheritance;
        self
    }

    /// Sets the declarations of the quantity.
    #[must_use]
    pub fn with_declarations(mut self, declarations: QuantityDeclarations) -> Self {
        self.declarations = declarations;
        self
    }

    /// Returns the identity of the quantity.
    #[must_use]
    pub const fn identity(&self) -> &QuantityIdentity {
        &self.identity
    }

    /// Returns the quantity this one specializes.
    #[must_use]
    pub const fn original(&self) -> &QuantityIdentity {
        &self.original
    }

    /// Returns which properties are inherited.
    #[must_use]
    pub const fn inheritance(&self) -> &Inheritance {
        &self.inheritance
    }

    /// Returns the declarations of the quantity.
    #[must_use]
    pub const fn declarations(&self) -> &QuantityDeclarations {
        &self.declarations
    }
}

/// A declared quantity of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityDescriptor {
    /// A base quantity.
    Base(QuantityBase),
    /// A specialization.
    Specialization(QuantitySpecialization),
}

impl QuantityDescriptor {
    /// Returns the identity of the quantity.
    #[must_use]
    pub const fn identity(&self) -> &QuantityIdentity {
        match self {
            Self::Base(base) => base.identity(),
            Self::Specialization(specialization) => specialization.identity(),
        }
    }

    /// Returns the declarations of the quantity.
    #[must_use]
    pub const fn declarations(&self) -> &QuantityDeclarations {
        match self {
            Self::Base(base) => base.declarations(),
            Self::Specialization(specialization) => specialization.declarations(),
        }
    }

    /// Returns the quantity this one specializes, or `None` for a base.
    #[must_use]
    pub const fn original(&self) -> Option<&QuantityIdentity> {
        match self {
            Self::Base(_) => None,
            Self::Specialization(specialization) => Some(specialization.original()),
        }
    }

    /// Returns whether the quantity continues into its original for the
    /// property picked by `select`. A base never does.
    pub fn inherits(&self, select: impl Fn(&Inheritance) -> bool) -> bool {
        match self {
            Self::Base(_) => false,
            Self::Specialization(specialization) => select(specialization.inheritance()),
        }
    }
}

impl From<QuantityBase> for QuantityDescriptor {
    fn from(base: QuantityBase) -> Self {
        Self::Base(base)
    }
}

impl From<QuantitySpecialization> for QuantityDescriptor {
    fn from(specialization: QuantitySpecialization) -> Self {
        Self::Specialization(specialization)
    }
}
