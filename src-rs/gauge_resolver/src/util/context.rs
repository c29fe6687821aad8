//! The shared, read-only view a single quantity is resolved against.

use indexmap::IndexSet;

use gauge_ir as ir;

use crate::{population::Population, resolver::resolve_unit_set::resolve_unit_set};

/// Everything the resolvers and filters of one quantity read.
///
/// Every quantity of a chain shares the base, and therefore the unit entry
/// and the unit bias, so the context serves each level of the chain.
#[derive(Debug, Clone, Copy)]
pub struct QuantityContext<'a> {
    population: &'a Population,
    catalog: &'a ir::UnitCatalog,
    entry: &'a ir::UnitCatalogEntry,
    use_unit_bias: bool,
}

impl<'a> QuantityContext<'a> {
    #[must_use]
    pub const fn new(
        population: &'a Population,
        catalog: &'a ir::UnitCatalog,
        entry: &'a ir::UnitCatalogEntry,
        use_unit_bias: bool,
    ) -> Self {
        Self {
            population,
            catalog,
            entry,
            use_unit_bias,
        }
    }

    #[must_use]
    pub const fn population(&self) -> &'a Population {
        self.population
    }

    #[must_use]
    pub const fn entry(&self) -> &'a ir::UnitCatalogEntry {
        self.entry
    }

    #[must_use]
    pub const fn use_unit_bias(&self) -> bool {
        self.use_unit_bias
    }

    /// Returns the base of `identity` if the quantity resolves, that is if it
    /// is linked and the unit of its base is in the catalog.
    ///
    /// Quantities rooted in a base with a missing unit are dropped from the
    /// output, so they count as unknown wherever another quantity names them.
    #[must_use]
    pub fn resolvable_base(
        &self,
        identity: &ir::QuantityIdentity,
    ) -> Option<&'a ir::QuantityBase> {
        self.population
            .base(identity)
            .filter(|base| self.catalog.get(base.unit()).is_some())
    }

    #[must_use]
    pub fn is_resolvable(&self, identity: &ir::QuantityIdentity) -> bool {
        self.resolvable_base(identity).is_some()
    }

    /// Resolves the unit-instance set of one level of the chain.
    #[must_use]
    pub fn unit_set(
        &self,
        identity: &ir::QuantityIdentity,
        relation: ir::UnitRelation,
    ) -> IndexSet<ir::UnitInstanceName> {
        resolve_unit_set(self.population, identity, self.entry, relation)
    }
}
