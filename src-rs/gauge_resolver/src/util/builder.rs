//! Builder types for constructing the population and the resolved collection.
//!
//! Both builders collect errors while they are filled. Converting a builder
//! into its final type returns either the value alone, when no error was
//! collected, or the value together with the collected errors.

use indexmap::IndexMap;

use gauge_ir::{
    QuantityBase, QuantityDescriptor, QuantityIdentity, QuantitySpecialization, ResolvedQuantity,
    ResolvedQuantityCollection,
};

use crate::{
    error::{LinkError, ResolutionError, collection::ResolutionErrorMap},
    population::Population,
};

/// A builder for linking declared quantities into a [`Population`].
///
/// Every accepted declaration is kept in declaration order, bases first. A
/// specialization only becomes part of the population once it is linked to
/// its base quantity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopulationBuilder {
    by_identity: IndexMap<QuantityIdentity, QuantityDescriptor>,
    base_of: IndexMap<QuantityIdentity, QuantityIdentity>,
    errors: ResolutionErrorMap,
}

impl PopulationBuilder {
    /// Creates a new, empty population builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a base quantity, which is linked to itself.
    ///
    /// A duplicate identity is reported and the declaration ignored.
    pub fn add_base(&mut self, base: QuantityBase) {
        let identity = base.identity().clone();

        if self.by_identity.contains_key(&identity) {
            self.errors
                .add_error(identity, LinkError::duplicate_quantity(true));
            return;
        }

        self.base_of.insert(identity.clone(), identity.clone());
        self.by_identity.insert(identity, base.into());
    }

    /// Adds a specialization, still unlinked.
    ///
    /// Returns the identity of the specialization if it was accepted, or
    /// `None` if the identity was already declared.
    pub fn add_specialization(
        &mut self,
        specialization: QuantitySpecialization,
    ) -> Option<QuantityIdentity> {
        let identity = specialization.identity().clone();

        if self.by_identity.contains_key(&identity) {
            self.errors
                .add_error(identity, LinkError::duplicate_quantity(false));
            return None;
        }

        self.by_identity
            .insert(identity.clone(), specialization.into());
        Some(identity)
    }

    /// Returns the original quantity of a declared specialization.
    #[must_use]
    pub fn get_original(&self, identity: &QuantityIdentity) -> Option<&QuantityIdentity> {
        self.by_identity
            .get(identity)
            .and_then(QuantityDescriptor::original)
    }

    /// Returns whether `identity` was declared, linked or not.
    #[must_use]
    pub fn is_declared(&self, identity: &QuantityIdentity) -> bool {
        self.by_identity.contains_key(identity)
    }

    /// Returns the position of `identity` in declaration order.
    #[must_use]
    pub fn declaration_index(&self, identity: &QuantityIdentity) -> Option<usize> {
        self.by_identity.get_index_of(identity)
    }

    /// Links `identity` to the base of its original quantity, if the
    /// original is already linked.
    ///
    /// Returns whether the specialization is now linked.
    pub fn try_link(&mut self, identity: &QuantityIdentity) -> bool {
        let base = self
            .get_original(identity)
            .and_then(|original| self.base_of.get(original))
            .cloned();

        match base {
            Some(base) => {
                self.base_of.insert(identity.clone(), base);
                true
            }
            None => false,
        }
    }

    /// Adds a linking error for the specified quantity.
    pub fn add_error(&mut self, identity: QuantityIdentity, error: LinkError) {
        self.errors.add_error(identity, error);
    }

    /// Removes an unlinked quantity from the population.
    pub fn drop_quantity(&mut self, identity: &QuantityIdentity) {
        self.by_identity.shift_remove(identity);
        self.base_of.shift_remove(identity);
        self.errors.add_dropped(identity.clone());
    }
}

impl TryInto<Population> for PopulationBuilder {
    type Error = (Population, ResolutionErrorMap);

    /// Attempts to convert the builder into a population.
    ///
    /// Returns `Ok(population)` if no linking error occurred, or
    /// `Err((population, errors))` where the population holds every linked
    /// quantity.
    fn try_into(self) -> Result<Population, (Population, ResolutionErrorMap)> {
        let population = Population::new(self.by_identity, self.base_of);

        if self.errors.is_empty() {
            Ok(population)
        } else {
            Err((population, self.errors))
        }
    }
}

/// A builder for the resolved quantities of a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCollectionBuilder {
    quantities: IndexMap<QuantityIdentity, ResolvedQuantity>,
    errors: ResolutionErrorMap,
}

impl ResolvedCollectionBuilder {
    /// Creates a builder that starts from the errors raised while linking.
    #[must_use]
    pub fn new(link_errors: ResolutionErrorMap) -> Self {
        Self {
            quantities: IndexMap::new(),
            errors: link_errors,
        }
    }

    /// Adds a resolved quantity.
    pub fn add_quantity(&mut self, quantity: ResolvedQuantity) {
        self.quantities.insert(quantity.identity().clone(), quantity);
    }

    /// Adds the errors raised while resolving a quantity.
    pub fn add_errors(&mut self, identity: &QuantityIdentity, errors: Vec<ResolutionError>) {
        self.errors.add_errors(identity, errors);
    }

    /// Records a quantity that could not be resolved at all.
    pub fn add_dropped_quantity(&mut self, identity: QuantityIdentity, error: ResolutionError) {
        self.errors.add_error(identity.clone(), error);
        self.errors.add_dropped(identity);
    }
}

impl TryInto<ResolvedQuantityCollection> for ResolvedCollectionBuilder {
    type Error = (ResolvedQuantityCollection, ResolutionErrorMap);

    /// Attempts to convert the builder into a resolved collection.
    ///
    /// Returns `Ok(collection)` if no error occurred, or
    /// `Err((collection, errors))` where the collection holds every quantity
    /// that resolved.
    fn try_into(
        self,
    ) -> Result<ResolvedQuantityCollection, (ResolvedQuantityCollection, ResolutionErrorMap)> {
        let collection = ResolvedQuantityCollection::new(self.quantities);

        if self.errors.is_empty() {
            Ok(collection)
        } else {
            Err((collection, self.errors))
        }
    }
}
