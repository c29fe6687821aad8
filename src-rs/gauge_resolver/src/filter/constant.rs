//! Validation of declared constants.
//!
//! Constants are checked level by level from the topmost visible ancestor
//! down to the quantity itself, so a constant is always compared against
//! everything declared above it and before it. The first constant to claim
//! a name or a multiples name keeps it.

use indexmap::{IndexMap, IndexSet};

use gauge_ir as ir;

use crate::{error::ConstantError, filter::LevelEntries, util::context::QuantityContext};

/// The names already claimed by earlier constants, with the quantity that
/// claimed each.
#[derive(Debug, Default)]
struct ClaimedNames {
    names: IndexMap<String, ir::QuantityIdentity>,
    multiples: IndexMap<String, ir::QuantityIdentity>,
}

/// Filters the constants of every level visible to `identity`.
///
/// Only the errors of `identity`'s own constants are returned.
#[must_use]
pub fn filter_constants(
    context: &QuantityContext<'_>,
    identity: &ir::QuantityIdentity,
) -> (LevelEntries<ir::Constant>, Vec<ConstantError>) {
    let mut levels = LevelEntries::new();
    let mut errors = Vec::new();
    let mut claimed = ClaimedNames::default();

    let chain = context
        .population()
        .inheritance_chain(identity, ir::Inheritance::constants);

    for level in chain.into_iter().rev() {
        let unit_bases = context.unit_set(level.identity(), ir::UnitRelation::UnitBases);
        let unit_instances = context.unit_set(level.identity(), ir::UnitRelation::Units);
        let unit_texts = unit_texts(context.entry(), &unit_instances);

        let mut kept = Vec::new();
        let mut level_errors = Vec::new();

        for constant in level.declarations().constants() {
            match check_constant(constant, &claimed, &unit_bases, &unit_texts) {
                Ok(()) => {
                    claimed
                        .names
                        .insert(constant.name().to_string(), level.identity().clone());
                    if let Some(multiples) = constant.multiples() {
                        claimed
                            .multiples
                            .insert(multiples.to_string(), level.identity().clone());
                    }
                    kept.push(constant.clone());
                }
                Err(error) => level_errors.push(error),
            }
        }

        if level.identity() == identity {
            errors = level_errors;
        }

        levels.insert(level.identity().clone(), kept);
    }

    (levels, errors)
}

/// The texts each permitted unit instance already uses: `One` followed by
/// the instance name, and the plural form.
fn unit_texts(
    entry: &ir::UnitCatalogEntry,
    unit_instances: &IndexSet<ir::UnitInstanceName>,
) -> IndexMap<String, ir::UnitInstanceName> {
    let mut texts = IndexMap::new();

    for instance in entry.instances() {
        if unit_instances.contains(instance.name()) {
            texts
                .entry(format!("One{}", instance.name()))
                .or_insert_with(|| instance.name().clone());
            texts
                .entry(instance.plural_form().to_string())
                .or_insert_with(|| instance.name().clone());
        }
    }

    texts
}

fn check_constant(
    constant: &ir::Constant,
    claimed: &ClaimedNames,
    unit_bases: &IndexSet<ir::UnitInstanceName>,
    unit_texts: &IndexMap<String, ir::UnitInstanceName>,
) -> Result<(), ConstantError> {
    let name = constant.name();

    if !unit_bases.contains(constant.unit_instance()) {
        return Err(ConstantError::unit_not_included(
            name.to_string(),
            constant.unit_instance().clone(),
        ));
    }

    if constant.multiples() == Some(name) {
        return Err(ConstantError::name_equals_multiples(name.to_string()));
    }

    if let Some(declared_by) = claimed.names.get(name) {
        return Err(ConstantError::duplicate_name(
            name.to_string(),
            declared_by.clone(),
        ));
    }

    if let Some(multiples) = constant.multiples()
        && let Some(declared_by) = claimed.multiples.get(multiples)
    {
        return Err(ConstantError::duplicate_multiples(
            name.to_string(),
            multiples.to_string(),
            declared_by.clone(),
        ));
    }

    for text in std::iter::once(name).chain(constant.multiples()) {
        if let Some(unit_instance) = unit_texts.get(text) {
            return Err(ConstantError::shares_name_with_unit(
                name.to_string(),
                text.to_string(),
                unit_instance.clone(),
            ));
        }
    }

    Ok(())
}
