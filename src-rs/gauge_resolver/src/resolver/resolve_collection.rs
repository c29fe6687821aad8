//! Resolution of the inherited collections of a quantity.

use gauge_ir as ir;

use crate::population::Population;

/// Collects the entries every visible level of the chain of `identity`
/// contributes, descendant-first.
///
/// `select` picks the inherit flag that lets a level pass the collection
/// down, and `items_of` returns the entries of one level.
pub fn resolve_collection<'a, T>(
    population: &'a Population,
    identity: &ir::QuantityIdentity,
    select: impl Fn(&ir::Inheritance) -> bool,
    items_of: impl FnMut(&'a ir::QuantityDescriptor) -> Vec<T>,
) -> Vec<T> {
    population
        .inheritance_chain(identity, select)
        .into_iter()
        .flat_map(items_of)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::construct::{DeclarationsBuilder, base, constant, id, link, specialization};

    fn constant_names(population: &Population, identity: &str) -> Vec<String> {
        resolve_collection(
            population,
            &id(identity),
            ir::Inheritance::constants,
            |descriptor| {
                descriptor
                    .declarations()
                    .constants()
                    .iter()
                    .map(|constant| constant.name().to_string())
                    .collect()
            },
        )
    }

    #[test]
    fn collections_concatenate_descendant_first() {
        // create a chain where every level declares a constant
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_constants(vec![constant("Planck", "Metre")])
                .build(),
        );
        let distance = specialization("Distance", "Length").with_declarations(
            DeclarationsBuilder::new()
                .with_constants(vec![constant("Marathon", "Metre")])
                .build(),
        );
        let radius = specialization("Radius", "Distance").with_declarations(
            DeclarationsBuilder::new()
                .with_constants(vec![constant("EarthRadius", "Metre")])
                .build(),
        );
        let population = link(vec![length], vec![distance, radius]);

        // check the order of the concatenation
        assert_eq!(
            constant_names(&population, "Radius"),
            vec!["EarthRadius", "Marathon", "Planck"]
        );
    }

    #[test]
    fn inherit_flag_stops_the_walk() {
        let length = base("Length").with_declarations(
            DeclarationsBuilder::new()
                .with_constants(vec![constant("Planck", "Metre")])
                .build(),
        );
        let distance = specialization("Distance", "Length")
            .with_inheritance(ir::Inheritance::all().with_constants(false))
            .with_declarations(
                DeclarationsBuilder::new()
                    .with_constants(vec![constant("Marathon", "Metre")])
                    .build(),
            );
        let radius = specialization("Radius", "Distance");
        let population = link(vec![length], vec![distance, radius]);

        assert_eq!(constant_names(&population, "Radius"), vec!["Marathon"]);
        assert_eq!(constant_names(&population, "Length"), vec!["Planck"]);
    }
}
