//! Validation of declared derivations.

use gauge_ir as ir;

use crate::{error::DerivationError, filter::LevelEntries, util::context::QuantityContext};

/// Filters the derivations of every level visible to `identity`.
///
/// A derivation whose signature names a quantity outside the population is
/// dropped. Only the errors of `identity`'s own derivations are returned.
#[must_use]
pub fn filter_derivations(
    context: &QuantityContext<'_>,
    identity: &ir::QuantityIdentity,
) -> (LevelEntries<ir::Derivation>, Vec<DerivationError>) {
    let mut levels = LevelEntries::new();
    let mut errors = Vec::new();

    let chain = context
        .population()
        .inheritance_chain(identity, ir::Inheritance::derivations);

    for level in chain {
        let mut kept = Vec::new();
        let mut level_errors = Vec::new();

        for derivation in level.declarations().derivations() {
            let unknown = derivation
                .signature()
                .iter()
                .find(|quantity| !context.is_resolvable(quantity));

            match unknown {
                Some(quantity) => level_errors.push(DerivationError::UnknownQuantity {
                    expression: derivation.expression().to_string(),
                    quantity: quantity.clone(),
                }),
                None => kept.push(derivation.clone()),
            }
        }

        if level.identity() == identity {
            errors = level_errors;
        }

        levels.insert(level.identity().clone(), kept);
    }

    (levels, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::construct::{
        DeclarationsBuilder, LENGTH_UNIT, base, derivation, id, length_catalog, link,
        specialization,
    };

    #[test]
    fn derivation_with_unknown_quantity_is_dropped() {
        // create the population
        let catalog = length_catalog(&["Metre"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_derivations(vec![
                    derivation("Length * Length", &["Length", "Length"]),
                    derivation("Speed * Time", &["Speed", "Time"]),
                ])
                .build(),
        );
        let population = link(vec![length], vec![]);
        let entry = catalog
            .get(&ir::UnitIdentity::new(LENGTH_UNIT))
            .expect("length unit should exist");
        let context = QuantityContext::new(&population, &catalog, entry, false);

        // filter the derivations
        let (levels, errors) = filter_derivations(&context, &id("Length"));

        // check that only the first unknown quantity is reported
        let kept = levels.get(&id("Length")).expect("level should exist");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].expression(), "Length * Length");
        assert_eq!(
            errors,
            vec![DerivationError::UnknownQuantity {
                expression: "Speed * Time".to_string(),
                quantity: id("Speed"),
            }]
        );
    }

    #[test]
    fn ancestor_derivations_are_filtered_without_reporting() {
        let catalog = length_catalog(&["Metre"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_derivations(vec![derivation("Area / Length", &["Area", "Length"])])
                .build(),
        );
        let distance = specialization("Distance", "Length");
        let population = link(vec![length], vec![distance]);
        let entry = catalog
            .get(&ir::UnitIdentity::new(LENGTH_UNIT))
            .expect("length unit should exist");
        let context = QuantityContext::new(&population, &catalog, entry, false);

        let (levels, errors) = filter_derivations(&context, &id("Distance"));

        assert!(errors.is_empty());
        assert!(levels.get(&id("Length")).expect("level should exist").is_empty());
    }

    #[test]
    fn derivation_naming_quantity_without_catalog_unit_is_dropped() {
        let catalog = length_catalog(&["Metre"]);
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_derivations(vec![derivation("Mass / Length", &["Mass", "Length"])])
                .build(),
        );
        let mass = ir::QuantityBase::new(id("Mass"), ir::UnitIdentity::new("UnitOfMass"));
        let population = link(vec![length, mass], vec![]);
        let entry = catalog
            .get(&ir::UnitIdentity::new(LENGTH_UNIT))
            .expect("length unit should exist");
        let context = QuantityContext::new(&population, &catalog, entry, false);

        let (levels, errors) = filter_derivations(&context, &id("Length"));

        assert!(levels.get(&id("Length")).expect("level should exist").is_empty());
        assert_eq!(
            errors,
            vec![DerivationError::UnknownQuantity {
                expression: "Mass / Length".to_string(),
                quantity: id("Mass"),
            }]
        );
    }
}
