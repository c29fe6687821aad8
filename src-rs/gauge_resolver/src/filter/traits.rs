//! Validation of the traits each level of a chain declares.

use indexmap::{IndexMap, IndexSet};

use gauge_ir as ir;

use crate::{error::TraitError, util::context::QuantityContext};

/// The cleaned traits of every level of a chain, keyed by level.
pub type LevelTraits = IndexMap<ir::QuantityIdentity, ir::TraitSet>;

/// Cleans the traits of every level of the chain of `identity`.
///
/// Returns the cleaned traits of each level, along with the errors raised by
/// the traits `identity` itself declares. Ancestors report their own errors
/// when they are resolved.
#[must_use]
pub fn filter_chain_traits(
    context: &QuantityContext<'_>,
    identity: &ir::QuantityIdentity,
) -> (LevelTraits, Vec<TraitError>) {
    let mut levels = LevelTraits::new();
    let mut errors = Vec::new();

    for level in context.population().chain(identity) {
        let unit_instances = context.unit_set(level.identity(), ir::UnitRelation::Units);
        let (traits, level_errors) =
            filter_traits(context, level.declarations().traits(), &unit_instances);

        if level.identity() == identity {
            errors = level_errors;
        }

        levels.insert(level.identity().clone(), traits);
    }

    (levels, errors)
}

/// Cleans the traits one level declares.
///
/// - associated quantities that do not resolve are removed
/// - a default unit missing its symbol, or the reverse, is removed
/// - a default unit the level does not permit is removed
#[must_use]
pub fn filter_traits(
    context: &QuantityContext<'_>,
    declared: &ir::TraitSet,
    unit_instances: &IndexSet<ir::UnitInstanceName>,
) -> (ir::TraitSet, Vec<TraitError>) {
    let mut traits = declared.clone();
    let mut errors = Vec::new();

    for kind in ir::AssociatedQuantity::ALL {
        let Some(quantity) = declared.associated(kind) else {
            continue;
        };

        if !context.is_resolvable(quantity) {
            errors.push(TraitError::UnknownAssociatedQuantity {
                kind,
                quantity: quantity.clone(),
            });
            traits.clear_associated(kind);
        }
    }

    match (declared.default_unit_name(), declared.default_unit_symbol()) {
        (Some(name), None) => {
            errors.push(TraitError::DefaultUnitWithoutSymbol { name: name.clone() });
            traits.clear_default_unit();
        }
        (None, Some(symbol)) => {
            errors.push(TraitError::DefaultSymbolWithoutUnit {
                symbol: symbol.to_string(),
            });
            traits.clear_default_unit();
        }
        (Some(name), Some(_)) if !unit_instances.contains(name) => {
            errors.push(TraitError::DefaultUnitNotIncluded { name: name.clone() });
            traits.clear_default_unit();
        }
        _ => (),
    }

    (traits, errors)
}

/// Reports a difference quantity declared by a quantity that, once resolved,
/// does not implement differences. The declaration is kept.
#[must_use]
pub fn check_difference(
    declared: Option<&ir::TraitSet>,
    resolved: &ir::ResolvedTraits,
) -> Option<TraitError> {
    let difference = declared?.associated(ir::AssociatedQuantity::Difference)?;

    if resolved.implement_difference() {
        None
    } else {
        Some(TraitError::DifferenceDisabled {
            difference: difference.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::construct::{
        DeclarationsBuilder, LENGTH_UNIT, base, excluding, id, length_catalog, link,
        specialization, unit_name,
    };

    #[test]
    fn unknown_associated_quantity_is_cleared() {
        let catalog = length_catalog(&["Metre"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(
                    ir::TraitSet::new()
                        .with_associated(ir::AssociatedQuantity::Square, id("Area"))
                        .with_associated(ir::AssociatedQuantity::Reciprocal, id("Length")),
                )
                .build(),
        );
        let population = link(vec![length], vec![]);
        let entry = catalog
            .get(&ir::UnitIdentity::new(LENGTH_UNIT))
            .expect("length unit should exist");
        let context = QuantityContext::new(&population, &catalog, entry, false);

        let (levels, errors) = filter_chain_traits(&context, &id("Length"));

        let traits = levels.get(&id("Length")).expect("level should exist");
        assert_eq!(traits.associated(ir::AssociatedQuantity::Square), None);
        assert_eq!(
            traits.associated(ir::AssociatedQuantity::Reciprocal),
            Some(&id("Length"))
        );
        assert_eq!(
            errors,
            vec![TraitError::UnknownAssociatedQuantity {
                kind: ir::AssociatedQuantity::Square,
                quantity: id("Area"),
            }]
        );
    }

    #[test]
    fn half_declared_default_unit_is_cleared() {
        let catalog = length_catalog(&["Metre"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(ir::TraitSet::new().with_default_unit_symbol("m"))
                .build(),
        );
        let population = link(vec![length], vec![]);
        let entry = catalog
            .get(&ir::UnitIdentity::new(LENGTH_UNIT))
            .expect("length unit should exist");
        let context = QuantityContext::new(&population, &catalog, entry, false);

        let (levels, errors) = filter_chain_traits(&context, &id("Length"));

        let traits = levels.get(&id("Length")).expect("level should exist");
        assert_eq!(traits.default_unit_symbol(), None);
        assert_eq!(
            errors,
            vec![TraitError::DefaultSymbolWithoutUnit {
                symbol: "m".to_string()
            }]
        );
    }

    #[test]
    fn ancestor_errors_are_not_reported_by_descendant() {
        let catalog = length_catalog(&["Metre", "Mile"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_units(excluding(&["Mile"]))
                .with_traits(
                    ir::TraitSet::new()
                        .with_default_unit_name(unit_name("Mile"))
                        .with_default_unit_symbol("mi"),
                )
                .build(),
        );
        let distance = specialization("Distance", "Length");
        let population = link(vec![length], vec![distance]);
        let entry = catalog
            .get(&ir::UnitIdentity::new(LENGTH_UNIT))
            .expect("length unit should exist");
        let context = QuantityContext::new(&population, &catalog, entry, false);

        let (levels, errors) = filter_chain_traits(&context, &id("Distance"));
        assert!(errors.is_empty());
        let base_traits = levels.get(&id("Length")).expect("level should exist");
        assert_eq!(base_traits.default_unit_name(), None);

        let (_, errors) = filter_chain_traits(&context, &id("Length"));
        assert_eq!(
            errors,
            vec![TraitError::DefaultUnitNotIncluded {
                name: unit_name("Mile")
            }]
        );
    }

    #[test]
    fn difference_check_only_applies_to_declared_difference() {
        let resolved = ir::ResolvedTraits::new(id("Length"), true, false, true);
        let declared =
            ir::TraitSet::new().with_associated(ir::AssociatedQuantity::Difference, id("Length"));

        assert_eq!(check_difference(Some(&ir::TraitSet::new()), &resolved), None);
        assert_eq!(
            check_difference(Some(&declared), &resolved),
            Some(TraitError::DifferenceDisabled {
                difference: id("Length")
            })
        );
    }

    #[test]
    fn associated_quantity_without_catalog_unit_is_cleared() {
        let catalog = length_catalog(&["Metre"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(
                    ir::TraitSet::new()
                        .with_associated(ir::AssociatedQuantity::Square, id("Mass")),
                )
                .build(),
        );
        let mass = ir::QuantityBase::new(id("Mass"), ir::UnitIdentity::new("UnitOfMass"));
        let population = link(vec![length, mass], vec![]);
        let entry = catalog
            .get(&ir::UnitIdentity::new(LENGTH_UNIT))
            .expect("length unit should exist");
        let context = QuantityContext::new(&population, &catalog, entry, false);

        let (levels, errors) = filter_chain_traits(&context, &id("Length"));

        let traits = levels.get(&id("Length")).expect("level should exist");
        assert_eq!(traits.associated(ir::AssociatedQuantity::Square), None);
        assert_eq!(
            errors,
            vec![TraitError::UnknownAssociatedQuantity {
                kind: ir::AssociatedQuantity::Square,
                quantity: id("Mass"),
            }]
        );
    }
}
