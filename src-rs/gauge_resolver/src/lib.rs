#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Gauge Quantity Resolver
//!
//! This crate turns a snapshot of declared quantities into resolved quantity
//! records. It handles the complete resolution pipeline:
//!
//! - Linking every specialization to the base quantity at the root of its chain
//! - Resolving inherited traits and collections
//! - Narrowing the permitted unit instances level by level
//! - Filtering out entries that conflict with the resolved view
//!
//! # Overview
//!
//! Linking runs once per snapshot and produces a read-only [`Population`].
//! Every quantity of the population then resolves independently of the
//! others, so a defect in one quantity never prevents the rest of the
//! snapshot from resolving. Each rejected entry becomes a diagnostic in the
//! returned [`ResolutionErrorMap`].

use std::sync::atomic::{AtomicBool, Ordering};

use gauge_ir as ir;

use crate::{
    error::{QuantityError, ResolutionError},
    util::builder::ResolvedCollectionBuilder,
};

pub mod error;
mod filter;
mod options;
mod population;
mod resolver;
mod util;

#[cfg(test)]
mod test;

pub use crate::error::collection::ResolutionErrorMap;
pub use crate::options::ResolverOptions;
pub use crate::population::{Chain, Population};

type ResolveOk = Box<ir::ResolvedQuantityCollection>;
type ResolveErr = Box<(ir::ResolvedQuantityCollection, ResolutionErrorMap)>;

type Outcome = Result<(ir::ResolvedQuantity, Vec<ResolutionError>), QuantityError>;

/// Resolves a snapshot of declared quantities.
///
/// This is the main entry point of the resolver. It links the declared bases
/// and specializations into a population, then resolves every linked
/// quantity.
///
/// # Returns
///
/// Returns `Ok(ResolvedQuantityCollection)` if every quantity resolved
/// without a diagnostic, or `Err((ResolvedQuantityCollection,
/// ResolutionErrorMap))` otherwise. The collection in the error case contains
/// every quantity that resolved, including those with rejected entries.
///
/// # Errors
///
/// The function reports the following, none of which stop the rest of the
/// snapshot from resolving:
///
/// - **Link errors**: duplicate identities, missing originals and cycles
/// - **Missing units**: a base unit absent from `catalog` drops every
///   quantity rooted in that base
/// - **Rejected entries**: traits, derivations, constants, conversions and
///   unit lists that conflict with the resolved view
///
/// # Example
///
/// ```rust
/// use gauge_ir::{
///     QuantityBase, QuantityIdentity, UnitCatalog, UnitCatalogEntry, UnitIdentity, UnitInstance,
///     UnitInstanceName,
/// };
/// use gauge_resolver::{ResolverOptions, resolve_quantities};
///
/// let catalog = UnitCatalog::new([UnitCatalogEntry::new(
///     UnitIdentity::new("UnitOfMass"),
///     [UnitInstance::new(UnitInstanceName::new("Gram"), "Grams")],
/// )]);
/// let mass = QuantityBase::new(QuantityIdentity::new("Mass"), UnitIdentity::new("UnitOfTime"));
///
/// match resolve_quantities(vec![mass], vec![], &catalog, &ResolverOptions::default()) {
///     Ok(_) => unreachable!("the unit of mass is misspelled"),
///     Err(result) => {
///         let (collection, errors) = *result;
///         assert!(collection.is_empty());
///         assert!(errors.get_dropped().contains(&QuantityIdentity::new("Mass")));
///     }
/// }
/// ```
pub fn resolve_quantities(
    bases: Vec<ir::QuantityBase>,
    specializations: Vec<ir::QuantitySpecialization>,
    catalog: &ir::UnitCatalog,
    options: &ResolverOptions,
) -> Result<ResolveOk, ResolveErr> {
    resolve_quantities_with_cancellation(
        bases,
        specializations,
        catalog,
        options,
        &AtomicBool::new(false),
    )
}

/// Resolves a snapshot of declared quantities, stopping early once `cancel`
/// is set.
///
/// Cancellation is checked before each quantity starts resolving. A
/// quantity either resolves completely or is absent from the output, so a
/// cancelled run never publishes a partially resolved record.
///
/// # Errors
///
/// See [`resolve_quantities`].
pub fn resolve_quantities_with_cancellation(
    bases: Vec<ir::QuantityBase>,
    specializations: Vec<ir::QuantitySpecialization>,
    catalog: &ir::UnitCatalog,
    options: &ResolverOptions,
    cancel: &AtomicBool,
) -> Result<ResolveOk, ResolveErr> {
    let (population, link_errors) = match Population::link(bases, specializations) {
        Ok(population) => (population, ResolutionErrorMap::new()),
        Err((population, link_errors)) => (population, link_errors),
    };

    resolve_linked(&population, link_errors, catalog, options, cancel)
}

/// Resolves every quantity of an already linked population.
///
/// Link errors are not included in the result; they were returned by
/// [`Population::link`].
///
/// # Errors
///
/// See [`resolve_quantities`].
pub fn resolve_population(
    population: &Population,
    catalog: &ir::UnitCatalog,
    options: &ResolverOptions,
) -> Result<ResolveOk, ResolveErr> {
    resolve_linked(
        population,
        ResolutionErrorMap::new(),
        catalog,
        options,
        &AtomicBool::new(false),
    )
}

fn resolve_linked(
    population: &Population,
    link_errors: ResolutionErrorMap,
    catalog: &ir::UnitCatalog,
    options: &ResolverOptions,
    cancel: &AtomicBool,
) -> Result<ResolveOk, ResolveErr> {
    let mut builder = ResolvedCollectionBuilder::new(link_errors);

    for (identity, outcome) in resolve_all(population, catalog, options, cancel) {
        match outcome {
            Ok((quantity, errors)) => {
                builder.add_errors(&identity, errors);
                builder.add_quantity(quantity);
            }
            Err(error) => builder.add_dropped_quantity(identity, error.into()),
        }
    }

    let result: Result<ir::ResolvedQuantityCollection, _> = builder.try_into();

    match result {
        Ok(collection) => {
            tracing::info!(resolved = collection.len(), "resolved quantity snapshot");
            Ok(Box::new(collection))
        }
        Err((collection, errors)) => {
            tracing::info!(
                resolved = collection.len(),
                diagnostics = errors.len(),
                dropped = errors.get_dropped().len(),
                "resolved quantity snapshot with diagnostics"
            );
            Err(Box::new((collection, errors)))
        }
    }
}

/// Resolves every linked quantity, in population order.
#[cfg(not(feature = "parallel"))]
fn resolve_all(
    population: &Population,
    catalog: &ir::UnitCatalog,
    options: &ResolverOptions,
    cancel: &AtomicBool,
) -> Vec<(ir::QuantityIdentity, Outcome)> {
    let mut outcomes = Vec::new();

    for (quantity, base) in population.linked() {
        if cancel.load(Ordering::Relaxed) {
            tracing::info!(
                remaining = population.len() - outcomes.len(),
                "resolution cancelled"
            );
            break;
        }

        let outcome = resolver::resolve_quantity(population, catalog, options, quantity, base);
        outcomes.push((quantity.identity().clone(), outcome));
    }

    outcomes
}

/// Resolves every linked quantity on the rayon thread pool. The outcomes
/// keep population order.
#[cfg(feature = "parallel")]
fn resolve_all(
    population: &Population,
    catalog: &ir::UnitCatalog,
    options: &ResolverOptions,
    cancel: &AtomicBool,
) -> Vec<(ir::QuantityIdentity, Outcome)> {
    use rayon::prelude::*;

    let linked: Vec<_> = population.linked().collect();

    let outcomes: Vec<_> = linked
        .par_iter()
        .filter_map(|&(quantity, base)| {
            if cancel.load(Ordering::Relaxed) {
                return None;
            }

            let outcome = resolver::resolve_quantity(population, catalog, options, quantity, base);
            Some((quantity.identity().clone(), outcome))
        })
        .collect();

    if outcomes.len() < linked.len() {
        tracing::info!(
            remaining = linked.len() - outcomes.len(),
            "resolution cancelled"
        );
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{ConversionError, LinkError, TraitError},
        test::construct::{
            DeclarationsBuilder, LENGTH_UNIT, base, constant, conversion, id, length_catalog,
            specialization, unit_name, unit_set,
        },
    };

    use proptest::prelude::*;

    #[test]
    fn length_and_distance_resolve_end_to_end() {
        // create the snapshot
        let catalog = length_catalog(&["m", "km"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_constants(vec![constant("Metre", "m")])
                .build(),
        );
        let distance = specialization("Distance", "Length");

        // resolve the snapshot
        let resolved = resolve_quantities(
            vec![length],
            vec![distance],
            &catalog,
            &ResolverOptions::default(),
        )
        .expect("snapshot should resolve without diagnostics");

        // check the resolved specialization
        let distance = resolved
            .get(&id("Distance"))
            .expect("distance should resolve");
        assert_eq!(distance.constants(), &[constant("Metre", "m")]);
        assert_eq!(distance.unit_instances(), &unit_set(&["m", "km"]));
        assert_eq!(distance.unit(), &ir::UnitIdentity::new(LENGTH_UNIT));
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn cycle_is_reported_once_and_siblings_resolve() {
        let catalog = length_catalog(&["Metre"]);
        let bases = vec![base("Length")];
        let specializations = vec![
            specialization("Speed", "Velocity"),
            specialization("Velocity", "Speed"),
            specialization("Distance", "Length"),
        ];

        let result = resolve_quantities(
            bases,
            specializations,
            &catalog,
            &ResolverOptions::default(),
        );

        let Err(result) = result else {
            panic!("the cycle should be reported");
        };
        let (collection, errors) = *result;

        assert!(collection.contains(&id("Length")));
        assert!(collection.contains(&id("Distance")));
        assert!(!collection.contains(&id("Speed")));
        assert!(!collection.contains(&id("Velocity")));

        let codes: Vec<_> = errors
            .to_diagnostics()
            .iter()
            .map(gauge_shared::error::Diagnostic::code)
            .collect();
        assert_eq!(codes, vec!["circular-specialization"]);
        assert_eq!(
            errors.get_quantity_errors(&id("Speed")),
            &[ResolutionError::from(LinkError::circular_specialization(
                vec![id("Speed"), id("Velocity"), id("Speed")]
            ))]
        );
    }

    #[test]
    fn missing_unit_drops_every_quantity_of_the_chain() {
        let catalog = length_catalog(&["Metre"]);
        let mass = ir::QuantityBase::new(id("Mass"), ir::UnitIdentity::new("UnitOfMass"));
        let weight = specialization("Weight", "Mass");

        let result = resolve_quantities(
            vec![base("Length"), mass],
            vec![weight],
            &catalog,
            &ResolverOptions::default(),
        );

        let Err(result) = result else {
            panic!("the missing unit should be reported");
        };
        let (collection, errors) = *result;

        assert_eq!(collection.len(), 1);
        assert!(collection.contains(&id("Length")));
        assert!(errors.get_dropped().contains(&id("Mass")));
        assert!(errors.get_dropped().contains(&id("Weight")));
        assert_eq!(
            errors.get_quantity_errors(&id("Weight")),
            &[ResolutionError::from(QuantityError::missing_unit(
                id("Mass"),
                ir::UnitIdentity::new("UnitOfMass")
            ))]
        );
    }

    #[test]
    fn dropped_quantities_are_unknown_to_survivors() {
        // create a snapshot naming a quantity whose base unit is missing
        let catalog = length_catalog(&["Metre"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(
                    ir::TraitSet::new()
                        .with_associated(ir::AssociatedQuantity::Square, id("Mass")),
                )
                .with_conversions(vec![conversion("Mass")])
                .build(),
        );
        let mass = ir::QuantityBase::new(id("Mass"), ir::UnitIdentity::new("UnitOfMass"));

        let result = resolve_quantities(
            vec![length, mass],
            vec![],
            &catalog,
            &ResolverOptions::default(),
        );

        let Err(result) = result else {
            panic!("the missing unit should be reported");
        };
        let (collection, errors) = *result;

        // check that no resolved record refers to the dropped quantity
        let length = collection.get(&id("Length")).expect("length should resolve");
        assert!(length.conversions().is_empty());
        assert_eq!(length.traits().associated(ir::AssociatedQuantity::Square), None);
        assert!(errors.get_dropped().contains(&id("Mass")));
        assert_eq!(
            errors.get_quantity_errors(&id("Length")),
            &[
                ResolutionError::from(TraitError::UnknownAssociatedQuantity {
                    kind: ir::AssociatedQuantity::Square,
                    quantity: id("Mass"),
                }),
                ResolutionError::from(ConversionError::UnknownTarget {
                    target: id("Mass")
                }),
            ]
        );
    }

    #[test]
    fn rejected_entries_keep_the_quantity() {
        let catalog = length_catalog(&["Metre"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_conversions(vec![conversion("Length")])
                .build(),
        );

        let result =
            resolve_quantities(vec![length], vec![], &catalog, &ResolverOptions::default());

        let Err(result) = result else {
            panic!("the conversion should be rejected");
        };
        let (collection, errors) = *result;

        let length = collection.get(&id("Length")).expect("length should resolve");
        assert!(length.conversions().is_empty());
        assert!(errors.get_dropped().is_empty());
        assert_eq!(
            errors.get_quantity_errors(&id("Length")),
            &[ResolutionError::from(ConversionError::ConversionToSelf)]
        );
    }

    #[test]
    fn cancelled_resolution_publishes_nothing() {
        let catalog = length_catalog(&["Metre"]);
        let cancel = AtomicBool::new(true);

        let resolved = resolve_quantities_with_cancellation(
            vec![base("Length")],
            vec![specialization("Distance", "Length")],
            &catalog,
            &ResolverOptions::default(),
            &cancel,
        )
        .expect("cancellation is not a diagnostic");

        assert!(resolved.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn resolving_twice_is_identical(
            parents in proptest::collection::vec(any::<prop::sample::Index>(), 0..16),
            excluded in proptest::collection::vec(any::<bool>(), 0..16),
        ) {
            // create a forest of specializations rooted in one base
            let catalog = length_catalog(&["Metre", "Kilometre", "Mile"]);
            let specializations: Vec<_> = parents
                .iter()
                .enumerate()
                .map(|(index, parent)| {
                    let original = match parent.index(index + 1) {
                        0 => "Length".to_string(),
                        parent => format!("Q{}", parent - 1),
                    };
                    let units = if excluded.get(index).copied().unwrap_or_default() {
                        ir::UnitList::excluding([unit_name("Mile")])
                    } else {
                        ir::UnitList::default()
                    };
                    ir::QuantitySpecialization::new(id(&format!("Q{index}")), id(&original))
                        .with_declarations(DeclarationsBuilder::new().with_units(units).build())
                })
                .collect();
            let population = Population::link(vec![base("Length")], specializations)
                .expect("an acyclic population should link");

            // resolve the same population twice
            let options = ResolverOptions::default();
            let first = resolve_population(&population, &catalog, &options);
            let second = resolve_population(&population, &catalog, &options);

            prop_assert_eq!(first, second);
        }
    }
}
