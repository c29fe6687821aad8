//! Resolution of the unit-instance sets of a quantity.
//!
//! The set starts as every instance of the unit. The levels of the chain
//! that pass their set down are then applied from the topmost one down to
//! the quantity itself. At each level a non-empty inclusion list narrows the
//! working set to the included instances, otherwise the exclusion list is
//! removed from it.
//!
//! Each level's lists are cleaned against the set that level inherits before
//! they are applied, so an inclusion of an instance an ancestor already
//! removed has no effect instead of emptying the set.

use indexmap::IndexSet;

use gauge_ir as ir;

use crate::{filter::unit_list::filter_unit_list, population::Population};

/// Resolves the set of instances of `entry` that `identity` permits for
/// `relation`, in catalog order.
#[must_use]
pub fn resolve_unit_set(
    population: &Population,
    identity: &ir::QuantityIdentity,
    entry: &ir::UnitCatalogEntry,
    relation: ir::UnitRelation,
) -> IndexSet<ir::UnitInstanceName> {
    let levels = population.inheritance_chain(identity, |inheritance| {
        inheritance.unit_relation(relation)
    });

    apply_levels(&levels, entry, relation)
}

/// Resolves the set `identity` inherits for `relation`, before its own lists
/// are applied.
///
/// This is every instance of the unit if `identity` is a base or does not
/// inherit the relation.
#[must_use]
pub fn inherited_unit_set(
    population: &Population,
    identity: &ir::QuantityIdentity,
    entry: &ir::UnitCatalogEntry,
    relation: ir::UnitRelation,
) -> IndexSet<ir::UnitInstanceName> {
    let levels = population.inheritance_chain(identity, |inheritance| {
        inheritance.unit_relation(relation)
    });

    apply_levels(levels.get(1..).unwrap_or_default(), entry, relation)
}

/// Narrows `working` by one level's cleaned lists.
#[must_use]
pub fn apply_unit_list(
    mut working: IndexSet<ir::UnitInstanceName>,
    list: &ir::UnitList,
) -> IndexSet<ir::UnitInstanceName> {
    if list.inclusions().is_empty() {
        working.retain(|name| !list.exclusions().contains(name));
    } else {
        working.retain(|name| list.inclusions().contains(name));
    }

    working
}

/// Applies the lists of `levels`, given descendant-first, from the last
/// level to the first.
fn apply_levels(
    levels: &[&ir::QuantityDescriptor],
    entry: &ir::UnitCatalogEntry,
    relation: ir::UnitRelation,
) -> IndexSet<ir::UnitInstanceName> {
    levels
        .iter()
        .rev()
        .fold(entry.instance_names(), |working, level| {
            let declared = level.declarations().unit_list(relation);
            let (list, _) = filter_unit_list(declared, entry, &working, relation);
            apply_unit_list(working, &list)
        })
}
