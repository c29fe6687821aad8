//! Resolution of a single linked quantity.
//!
//! A quantity resolves against the read-only population only, so every
//! quantity of a snapshot can resolve independently of the others.

use gauge_ir as ir;
use gauge_shared::error::AsDiagnostic;

use crate::{
    error::{QuantityError, ResolutionError, convert_errors},
    filter::{
        LevelEntries, constant::filter_constants, conversion::filter_conversions,
        derivation::filter_derivations, traits, unit_list::filter_unit_list,
    },
    options::ResolverOptions,
    population::Population,
    util::context::QuantityContext,
};

pub mod resolve_collection;
pub mod resolve_trait;
pub mod resolve_unit_set;

/// Resolves one linked quantity into its resolved record.
///
/// Returns the record along with the errors raised by the entries the
/// quantity itself declares. Entries inherited from ancestors are filtered
/// the same way, but their errors belong to the ancestor that declared them.
///
/// # Errors
///
/// Returns [`QuantityError::MissingUnit`] if the unit of `base` is not in
/// `catalog`.
#[tracing::instrument(
    level = "debug",
    name = "resolve_quantity",
    skip_all,
    fields(quantity = %quantity.identity())
)]
pub fn resolve_quantity(
    population: &Population,
    catalog: &ir::UnitCatalog,
    options: &ResolverOptions,
    quantity: &ir::QuantityDescriptor,
    base: &ir::QuantityBase,
) -> Result<(ir::ResolvedQuantity, Vec<ResolutionError>), QuantityError> {
    let identity = quantity.identity();

    let Some(entry) = catalog.get(base.unit()) else {
        return Err(QuantityError::missing_unit(
            base.identity().clone(),
            base.unit().clone(),
        ));
    };

    let context = QuantityContext::new(population, catalog, entry, base.use_unit_bias());
    let mut errors = Vec::new();

    // unit sets
    let mut resolve_relation = |relation| {
        let inherited =
            resolve_unit_set::inherited_unit_set(population, identity, entry, relation);
        let declared = quantity.declarations().unit_list(relation);
        let (_, list_errors) = filter_unit_list(declared, entry, &inherited, relation);
        errors.extend(convert_errors(list_errors));

        resolve_unit_set::resolve_unit_set(population, identity, entry, relation)
    };
    let unit_instances = resolve_relation(ir::UnitRelation::Units);
    let unit_base_instances = resolve_relation(ir::UnitRelation::UnitBases);

    // traits
    let (level_traits, trait_errors) = traits::filter_chain_traits(&context, identity);
    errors.extend(convert_errors(trait_errors));

    let resolved_traits =
        resolve_trait::resolve_traits(population, identity, &level_traits, options);
    if let Some(error) = traits::check_difference(level_traits.get(identity), &resolved_traits) {
        errors.push(error.into());
    }

    // collections
    let (derivation_levels, derivation_errors) = filter_derivations(&context, identity);
    errors.extend(convert_errors(derivation_errors));
    let derivations = collect_levels(
        population,
        identity,
        ir::Inheritance::derivations,
        &derivation_levels,
    );

    let (constant_levels, constant_errors) = filter_constants(&context, identity);
    errors.extend(convert_errors(constant_errors));
    let constants = collect_levels(
        population,
        identity,
        ir::Inheritance::constants,
        &constant_levels,
    );

    let (conversion_levels, conversion_errors) = filter_conversions(&context, identity);
    errors.extend(convert_errors(conversion_errors));
    let conversions = collect_levels(
        population,
        identity,
        ir::Inheritance::conversions,
        &conversion_levels,
    );

    tracing::trace!(
        derivations = derivations.len(),
        constants = constants.len(),
        conversions = conversions.len(),
        units = unit_instances.len(),
        unit_bases = unit_base_instances.len(),
        "resolved collections"
    );

    for error in &errors {
        tracing::debug!(code = error.code(), "{error}");
    }

    let resolved = ir::ResolvedQuantity::new(
        identity.clone(),
        quantity.original().cloned(),
        base.identity().clone(),
        base.unit().clone(),
        base.use_unit_bias(),
        resolved_traits,
        derivations,
        constants,
        conversions,
        unit_instances,
        unit_base_instances,
    );

    Ok((resolved, errors))
}

/// Concatenates the filtered entries of every visible level.
fn collect_levels<T: Clone>(
    population: &Population,
    identity: &ir::QuantityIdentity,
    select: impl Fn(&ir::Inheritance) -> bool,
    levels: &LevelEntries<T>,
) -> Vec<T> {
    resolve_collection::resolve_collection(population, identity, select, |descriptor| {
        levels
            .get(descriptor.identity())
            .cloned()
            .unwrap_or_default()
    })
}
