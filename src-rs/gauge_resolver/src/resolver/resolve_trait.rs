//! Resolution of the traits of a quantity.
//!
//! Traits are always inherited. Each trait takes the value of the nearest
//! level of the chain that declares it, starting at the quantity itself.

use gauge_ir as ir;

use crate::{filter::traits::LevelTraits, options::ResolverOptions, population::Population};

/// Returns the value `project` finds on the nearest level of the chain of
/// `identity`, if any level declares one.
///
/// `levels` holds the cleaned traits of each level. A level missing from it
/// is read through its declared traits.
pub fn resolve_trait<'a, T>(
    population: &'a Population,
    identity: &ir::QuantityIdentity,
    levels: &'a LevelTraits,
    mut project: impl FnMut(&'a ir::TraitSet) -> Option<T>,
) -> Option<T> {
    population
        .chain(identity)
        .find_map(|descriptor| project(level_traits(levels, descriptor)))
}

/// Resolves the difference quantity, which defaults to the quantity itself.
#[must_use]
pub fn resolve_difference(
    population: &Population,
    identity: &ir::QuantityIdentity,
    levels: &LevelTraits,
) -> ir::QuantityIdentity {
    resolve_trait(population, identity, levels, |traits| {
        traits.associated(ir::AssociatedQuantity::Difference)
    })
    .cloned()
    .unwrap_or_else(|| identity.clone())
}

/// Resolves every trait of `identity`.
///
/// Boolean traits no level declares take their value from `options`. The
/// default unit name and symbol are resolved together, from the nearest
/// level that declares a default unit.
#[must_use]
pub fn resolve_traits(
    population: &Population,
    identity: &ir::QuantityIdentity,
    levels: &LevelTraits,
    options: &ResolverOptions,
) -> ir::ResolvedTraits {
    let implement_sum = resolve_trait(population, identity, levels, ir::TraitSet::implement_sum)
        .unwrap_or(options.implement_sum());
    let implement_difference = resolve_trait(
        population,
        identity,
        levels,
        ir::TraitSet::implement_difference,
    )
    .unwrap_or(options.implement_difference());
    let generate_documentation = resolve_trait(
        population,
        identity,
        levels,
        ir::TraitSet::generate_documentation,
    )
    .unwrap_or(options.generate_documentation());

    let mut resolved = ir::ResolvedTraits::new(
        resolve_difference(population, identity, levels),
        implement_sum,
        implement_difference,
        generate_documentation,
    );

    for kind in ir::AssociatedQuantity::ALL {
        if kind == ir::AssociatedQuantity::Difference {
            continue;
        }

        let quantity = resolve_trait(population, identity, levels, |traits| {
            traits.associated(kind)
        });
        resolved = resolved.with_associated(kind, quantity.cloned());
    }

    let default_unit = resolve_trait(population, identity, levels, |traits| {
        traits
            .default_unit_name()
            .map(|name| (name.clone(), traits.default_unit_symbol().map(str::to_string)))
    });

    match default_unit {
        Some((name, symbol)) => resolved.with_default_unit(Some(name), symbol),
        None => resolved,
    }
}

fn level_traits<'a>(
    levels: &'a LevelTraits,
    descriptor: &'a ir::QuantityDescriptor,
) -> &'a ir::TraitSet {
    levels
        .get(descriptor.identity())
        .unwrap_or_else(|| descriptor.declarations().traits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::construct::{DeclarationsBuilder, base, id, link, specialization, unit_name};

    fn declared_levels(population: &Population, identity: &str) -> LevelTraits {
        population
            .chain(&id(identity))
            .map(|descriptor| {
                (
                    descriptor.identity().clone(),
                    descriptor.declarations().traits().clone(),
                )
            })
            .collect()
    }

    #[test]
    fn nearest_declaration_wins() {
        // create a three-level chain where two levels declare a reciprocal
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(
                    ir::TraitSet::new()
                        .with_associated(ir::AssociatedQuantity::Reciprocal, id("Wavenumber")),
                )
                .build(),
        );
        let distance = specialization("Distance", "Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(
                    ir::TraitSet::new()
                        .with_associated(ir::AssociatedQuantity::Reciprocal, id("Length")),
                )
                .build(),
        );
        let radius = specialization("Radius", "Distance");
        let population = link(vec![length], vec![distance, radius]);
        let levels = declared_levels(&population, "Radius");

        // resolve the traits of the deepest level
        let resolved = resolve_traits(
            &population,
            &id("Radius"),
            &levels,
            &ResolverOptions::default(),
        );

        // check that the nearest declaration wins
        assert_eq!(
            resolved.associated(ir::AssociatedQuantity::Reciprocal),
            Some(&id("Length"))
        );
        assert_eq!(resolved.associated(ir::AssociatedQuantity::Square), None);
    }

    #[test]
    fn difference_defaults_to_self() {
        let length = base("Length");
        let distance = specialization("Distance", "Length");
        let population = link(vec![length], vec![distance]);
        let levels = declared_levels(&population, "Distance");

        assert_eq!(
            resolve_difference(&population, &id("Distance"), &levels),
            id("Distance")
        );
    }

    #[test]
    fn base_difference_defaults_to_self() {
        let population = link(vec![base("Length")], vec![]);
        let levels = declared_levels(&population, "Length");

        assert_eq!(
            resolve_difference(&population, &id("Length"), &levels),
            id("Length")
        );
    }

    #[test]
    fn middle_declaration_reaches_its_descendants() {
        // create a three-level chain where only the middle level declares a reciprocal
        let length = base("Length");
        let distance = specialization("Distance", "Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(
                    ir::TraitSet::new()
                        .with_associated(ir::AssociatedQuantity::Reciprocal, id("Wavenumber")),
                )
                .build(),
        );
        let radius = specialization("Radius", "Distance");
        let population = link(vec![length], vec![distance, radius]);

        // resolve the reciprocal of every level
        let reciprocal = |identity: &str| {
            let levels = declared_levels(&population, identity);
            resolve_traits(
                &population,
                &id(identity),
                &levels,
                &ResolverOptions::default(),
            )
            .associated(ir::AssociatedQuantity::Reciprocal)
            .cloned()
        };

        // check that the declaring level and the level below it see the value
        assert_eq!(reciprocal("Distance"), Some(id("Wavenumber")));
        assert_eq!(reciprocal("Radius"), Some(id("Wavenumber")));
        assert_eq!(reciprocal("Length"), None);
    }

    #[test]
    fn undeclared_booleans_take_options() {
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(ir::TraitSet::new().with_implement_sum(false))
                .build(),
        );
        let population = link(vec![length], vec![]);
        let levels = declared_levels(&population, "Length");
        let options = ResolverOptions::default().with_generate_documentation(false);

        let resolved = resolve_traits(&population, &id("Length"), &levels, &options);

        assert!(!resolved.implement_sum());
        assert!(resolved.implement_difference());
        assert!(!resolved.generate_documentation());
    }

    #[test]
    fn default_unit_resolves_as_pair() {
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(
                    ir::TraitSet::new()
                        .with_default_unit_name(unit_name("Metre"))
                        .with_default_unit_symbol("m"),
                )
                .build(),
        );
        let distance = specialization("Distance", "Length").with_declarations(
            DeclarationsBuilder::new()
                .with_traits(
                    ir::TraitSet::new()
                        .with_default_unit_name(unit_name("Kilometre"))
                        .with_default_unit_symbol("km"),
                )
                .build(),
        );
        let population = link(vec![length], vec![distance]);
        let levels = declared_levels(&population, "Distance");

        let resolved = resolve_traits(
            &population,
            &id("Distance"),
            &levels,
            &ResolverOptions::default(),
        );

        assert_eq!(resolved.default_unit_name(), Some(&unit_name("Kilometre")));
        assert_eq!(resolved.default_unit_symbol(), Some("km"));
    }
}
