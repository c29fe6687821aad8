//! Resolved quantities, the output of resolution.

use indexmap::{IndexMap, IndexSet};

use crate::{
    items::{Constant, Conversion, Derivation},
    reference::{QuantityIdentity, UnitIdentity, UnitInstanceName},
    traits::ResolvedTraits,
};

/// A quantity after inheritance, set filtering and conflict resolution.
///
/// Collections are ordered descendant-first: the quantity's own entries come
/// before those of its original, which come before those of the original's
/// original, and so on. Unit-instance sets keep the order of the unit
/// catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuantity {
    identity: QuantityIdentity,
    original: Option<QuantityIdentity>,
    base: QuantityIdentity,
    unit: UnitIdentity,
    use_unit_bias: bool,
    traits: ResolvedTraits,
    derivations: Vec<Derivation>,
    constants: Vec<Constant>,
    conversions: Vec<Conversion>,
    unit_instances: IndexSet<UnitInstanceName>,
    unit_base_instances: IndexSet<UnitInstanceName>,
}

impl ResolvedQuantity {
    /// Creates a resolved quantity.
    #[expect(
        clippy::too_many_arguments,
        reason = "the resolved record is assembled once, from every resolver's output"
    )]
    #[must_use]
    pub const fn new(
        identity: QuantityIdentity,
        original: Option<QuantityIdentity>,
        base: QuantityIdentity,
        unit: UnitIdentity,
        use_unit_bias: bool,
        traits: ResolvedTraits,
        derivations: Vec<Derivation>,
        constants: Vec<Constant>,
        conversions: Vec<Conversion>,
        unit_instances: IndexSet<UnitInstanceName>,
        unit_base_instances: IndexSet<UnitInstanceName>,
    ) -> Self {
        Self {
            identity,
            original,
            base,
            unit,
            use_unit_bias,
            traits,
            derivations,
            constants,
            conversions,
            unit_instances,
            unit_base_instances,
        }
    }

    /// Returns the identity of the quantity.
    #[must_use]
    pub const fn identity(&self) -> &QuantityIdentity {
        &self.identity
    }

    /// Returns the quantity this one specializes, or `None` for a base.
    #[must_use]
    pub const fn original(&self) -> Option<&QuantityIdentity> {
        self.original.as_ref()
    }

    /// Returns the base quantity at the root of the specialization chain.
    #[must_use]
    pub const fn base(&self) -> &QuantityIdentity {
        &self.base
    }

    /// Returns the unit of measure of the quantity.
    #[must_use]
    pub const fn unit(&self) -> &UnitIdentity {
        &self.unit
    }

    /// Returns whether the quantity uses a unit bias.
    #[must_use]
    pub const fn use_unit_bias(&self) -> bool {
        self.use_unit_bias
    }

    /// Returns the resolved traits.
    #[must_use]
    pub const fn traits(&self) -> &ResolvedTraits {
        &self.traits
    }

    /// Returns the resolved derivations.
    #[must_use]
    pub fn derivations(&self) -> &[Derivation] {
        &self.derivations
    }

    /// Returns the resolved constants.
    #[must_use]
    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    /// Returns the resolved conversions.
    #[must_use]
    pub fn conversions(&self) -> &[Conversion] {
        &self.conversions
    }

    /// Returns the unit instances the quantity may be expressed in.
    #[must_use]
    pub const fn unit_instances(&self) -> &IndexSet<UnitInstanceName> {
        &self.unit_instances
    }

    /// Returns the unit instances constants may be declared against.
    #[must_use]
    pub const fn unit_base_instances(&self) -> &IndexSet<UnitInstanceName> {
        &self.unit_base_instances
    }
}

/// Every quantity of a snapshot that resolved, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedQuantityCollection {
    quantities: IndexMap<QuantityIdentity, ResolvedQuantity>,
}

impl ResolvedQuantityCollection {
    /// Creates a collection from resolved quantities keyed by identity.
    #[must_use]
    pub const fn new(quantities: IndexMap<QuantityIdentity, ResolvedQuantity>) -> Self {
        Self { quantities }
    }

    /// Looks up a resolved quantity.
    #[must_use]
    pub fn get(&self, identity: &QuantityIdentity) -> Option<&ResolvedQuantity> {
        self.quantities.get(identity)
    }

    /// Returns whether `identity` resolved.
    #[must_use]
    pub fn contains(&self, identity: &QuantityIdentity) -> bool {
        self.quantities.contains_key(identity)
    }

    /// Returns every resolved quantity, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedQuantity> {
        self.quantities.values()
    }

    /// Returns the number of resolved quantities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Returns whether nothing resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}
