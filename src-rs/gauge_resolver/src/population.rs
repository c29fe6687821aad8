//! The linked quantity population.
//!
//! Linking assigns every specialization the base quantity at the root of its
//! chain. Specializations may be declared in any order and may specialize
//! other specializations, so linking runs as a fixpoint: each pass links the
//! specializations whose original is already linked, and the loop stops once
//! a pass links nothing. Whatever is left references a missing quantity or
//! sits on (or leads into) a cycle, and is dropped with a diagnostic.

use indexmap::{IndexMap, IndexSet};

use gauge_ir::{
    Inheritance, QuantityBase, QuantityDescriptor, QuantityIdentity, QuantitySpecialization,
};

use crate::{
    error::{AncestorState, LinkError, collection::ResolutionErrorMap},
    util::{Stack, builder::PopulationBuilder},
};

/// Every linked quantity of a snapshot.
///
/// A population is read-only once built. Every quantity it holds is rooted
/// in a base quantity, so walking a chain always terminates.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    by_identity: IndexMap<QuantityIdentity, QuantityDescriptor>,
    base_of: IndexMap<QuantityIdentity, QuantityIdentity>,
}

impl Population {
    pub(crate) const fn new(
        by_identity: IndexMap<QuantityIdentity, QuantityDescriptor>,
        base_of: IndexMap<QuantityIdentity, QuantityIdentity>,
    ) -> Self {
        Self {
            by_identity,
            base_of,
        }
    }

    /// Links declared bases and specializations into a population.
    ///
    /// # Errors
    ///
    /// Returns `Err((population, errors))` if any declaration was rejected.
    /// The population then holds every quantity that did link.
    ///
    /// - a duplicate identity keeps its first declaration
    /// - a specialization whose original is missing, or not rooted in a base,
    ///   is dropped
    /// - every quantity of a cycle is dropped, with one diagnostic per cycle
    pub fn link(
        bases: impl IntoIterator<Item = QuantityBase>,
        specializations: impl IntoIterator<Item = QuantitySpecialization>,
    ) -> Result<Self, (Self, ResolutionErrorMap)> {
        let mut builder = PopulationBuilder::new();

        for base in bases {
            builder.add_base(base);
        }

        let worklist = specializations
            .into_iter()
            .filter_map(|specialization| builder.add_specialization(specialization))
            .collect();

        let unlinked = link_to_fixpoint(&mut builder, worklist);
        reject_unlinked(&mut builder, &unlinked);

        builder.try_into()
    }

    /// Looks up a linked quantity.
    #[must_use]
    pub fn get(&self, identity: &QuantityIdentity) -> Option<&QuantityDescriptor> {
        self.by_identity.get(identity)
    }

    /// Returns whether `identity` is a linked quantity.
    #[must_use]
    pub fn contains(&self, identity: &QuantityIdentity) -> bool {
        self.by_identity.contains_key(identity)
    }

    /// Returns the identity of the base quantity `identity` is rooted in.
    #[must_use]
    pub fn base_of(&self, identity: &QuantityIdentity) -> Option<&QuantityIdentity> {
        self.base_of.get(identity)
    }

    /// Returns the base quantity `identity` is rooted in.
    #[must_use]
    pub fn base(&self, identity: &QuantityIdentity) -> Option<&QuantityBase> {
        let base_identity = self.base_of.get(identity)?;

        match self.by_identity.get(base_identity)? {
            QuantityDescriptor::Base(base) => Some(base),
            QuantityDescriptor::Specialization(_) => None,
        }
    }

    /// Returns every linked identity, in declaration order.
    pub fn identities(&self) -> impl Iterator<Item = &QuantityIdentity> {
        self.by_identity.keys()
    }

    /// Returns the number of linked quantities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_identity.len()
    }

    /// Returns whether no quantity linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_identity.is_empty()
    }

    /// Returns every linked quantity paired with the base it is rooted in.
    pub fn linked(&self) -> impl Iterator<Item = (&QuantityDescriptor, &QuantityBase)> {
        self.by_identity
            .iter()
            .filter_map(|(identity, descriptor)| Some((descriptor, self.base(identity)?)))
    }

    /// Walks the specialization chain of `identity`, from the quantity itself
    /// up to and including its base.
    #[must_use]
    pub fn chain<'a>(&'a self, identity: &QuantityIdentity) -> Chain<'a> {
        Chain {
            population: self,
            next: self.by_identity.get(identity),
        }
    }

    /// Returns the levels of the chain of `identity` whose entries are
    /// visible to it for the property picked by `select`.
    ///
    /// The walk starts at `identity` and moves to the original quantity only
    /// while the current level inherits the property, so the result is
    /// ordered descendant-first.
    pub fn inheritance_chain(
        &self,
        identity: &QuantityIdentity,
        select: impl Fn(&Inheritance) -> bool,
    ) -> Vec<&QuantityDescriptor> {
        let mut levels = Vec::new();

        for descriptor in self.chain(identity) {
            levels.push(descriptor);

            if !descriptor.inherits(&select) {
                break;
            }
        }

        levels
    }
}

/// An iterator over a specialization chain, descendant-first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    population: &'a Population,
    next: Option<&'a QuantityDescriptor>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a QuantityDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        self.next = current
            .original()
            .and_then(|original| self.population.by_identity.get(original));

        Some(current)
    }
}

/// Links specializations in passes until a pass makes no progress.
///
/// Returns the specializations that never linked.
fn link_to_fixpoint(
    builder: &mut PopulationBuilder,
    mut worklist: Vec<QuantityIdentity>,
) -> Vec<QuantityIdentity> {
    let mut pass = 0_usize;

    while !worklist.is_empty() {
        pass += 1;

        let before = worklist.len();
        worklist.retain(|identity| !builder.try_link(identity));
        let linked = before - worklist.len();

        tracing::debug!(
            pass,
            linked,
            unlinked = worklist.len(),
            "population linking pass"
        );

        if linked == 0 {
            break;
        }
    }

    worklist
}

/// Reports and removes every specialization that could not be linked.
///
/// Each unlinked quantity either sits on a cycle or reaches one, or a
/// missing quantity, by following its originals. A cycle is reported once,
/// on its first declared member. Every other unlinked quantity is reported
/// as having an unresolvable ancestor.
fn reject_unlinked(builder: &mut PopulationBuilder, unlinked: &[QuantityIdentity]) {
    let mut rejected: IndexSet<QuantityIdentity> = IndexSet::new();

    for start in unlinked {
        if rejected.contains(start) {
            continue;
        }

        let mut stack = Stack::new();
        let mut current = start.clone();
        let mut cycle = None;

        loop {
            if let Some(found) = stack.find_circular_dependency(&current) {
                cycle = Some(found);
                break;
            }

            if rejected.contains(&current) {
                break;
            }

            let Some(original) = builder.get_original(&current).cloned() else {
                break;
            };

            stack.push(current);

            if !builder.is_declared(&original) {
                break;
            }

            current = original;
        }

        if let Some(cycle) = cycle {
            let cycle = rotate_to_first_declared(builder, cycle);

            if let Some(first) = cycle.first().cloned() {
                rejected.extend(cycle.iter().cloned());
                builder.add_error(first, LinkError::circular_specialization(cycle));
            }
        }

        for identity in stack.into_items() {
            if rejected.contains(&identity) {
                continue;
            }

            if let Some(original) = builder.get_original(&identity).cloned() {
                let ancestor = if builder.is_declared(&original) {
                    AncestorState::Unlinkable
                } else {
                    AncestorState::Missing
                };
                builder.add_error(
                    identity.clone(),
                    LinkError::unresolvable_ancestor(original, ancestor),
                );
            }

            rejected.insert(identity);
        }
    }

    for identity in &rejected {
        builder.drop_quantity(identity);
    }

    tracing::debug!(dropped = rejected.len(), "population linking finished");
}

/// Rotates a cycle path (first member repeated at the end) so that it starts
/// and ends at the member declared first.
fn rotate_to_first_declared(
    builder: &PopulationBuilder,
    mut cycle: Vec<QuantityIdentity>,
) -> Vec<QuantityIdentity> {
    cycle.pop();

    let first = cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, identity)| builder.declaration_index(identity))
        .map_or(0, |(index, _)| index);

    cycle.rotate_left(first);

    if let Some(head) = cycle.first().cloned() {
        cycle.push(head);
    }

    cycle
}
