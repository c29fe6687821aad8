//! Cleaning of inclusion and exclusion lists.

use indexmap::IndexSet;

use gauge_ir as ir;

use crate::error::UnitListError;

/// Cleans the lists one level declares for `relation`.
///
/// `inherited` is the set the level receives from its ancestors. The cleaned
/// lists only name known instances, name each at most once and only name
/// instances of `inherited`. When both lists are declared, the exclusions are
/// dropped outright and only the inclusions apply.
#[must_use]
pub fn filter_unit_list(
    declared: &ir::UnitList,
    entry: &ir::UnitCatalogEntry,
    inherited: &IndexSet<ir::UnitInstanceName>,
    relation: ir::UnitRelation,
) -> (ir::UnitList, Vec<UnitListError>) {
    let mut errors = Vec::new();

    let both_declared = !declared.inclusions().is_empty() && !declared.exclusions().is_empty();
    if both_declared {
        errors.push(UnitListError::ExclusionsIgnored { relation });
    }

    let inclusions = known_and_unique(declared.inclusions(), entry, relation, &mut errors);
    let inclusions = inclusions
        .into_iter()
        .filter(|name| {
            let effective = inherited.contains(name);
            if !effective {
                errors.push(UnitListError::InclusionHadNoEffect {
                    relation,
                    name: name.clone(),
                });
            }
            effective
        })
        .collect();

    let exclusions = if both_declared {
        Vec::new()
    } else {
        let exclusions = known_and_unique(declared.exclusions(), entry, relation, &mut errors);
        exclusions
            .into_iter()
            .filter(|name| {
                let effective = inherited.contains(name);
                if !effective {
                    errors.push(UnitListError::ExclusionHadNoEffect {
                        relation,
                        name: name.clone(),
                    });
                }
                effective
            })
            .collect()
    };

    (ir::UnitList::new(inclusions, exclusions), errors)
}

/// Drops names that are not instances of the unit, and repeated names.
fn known_and_unique(
    names: &[ir::UnitInstanceName],
    entry: &ir::UnitCatalogEntry,
    relation: ir::UnitRelation,
    errors: &mut Vec<UnitListError>,
) -> Vec<ir::UnitInstanceName> {
    let mut seen = IndexSet::new();

    for name in names {
        if !entry.contains(name) {
            errors.push(UnitListError::UnknownUnitInstance {
                relation,
                name: name.clone(),
                unit: entry.unit().clone(),
            });
        } else if !seen.insert(name.clone()) {
            errors.push(UnitListError::DuplicateListing {
                relation,
                name: name.clone(),
            });
        }
    }

    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::construct::{LENGTH_UNIT, unit_name, unit_names, unit_set};

    fn entry() -> ir::UnitCatalogEntry {
        ir::UnitCatalogEntry::new(
            ir::UnitIdentity::new(LENGTH_UNIT),
            ["Metre", "Kilometre", "Mile"]
                .into_iter()
                .map(|name| ir::UnitInstance::new(unit_name(name), format!("{name}s"))),
        )
    }

    #[test]
    fn unknown_and_duplicate_names_are_dropped() {
        let declared = ir::UnitList::including(unit_names(&["Metre", "Parsec", "Metre"]));
        let inherited = unit_set(&["Metre", "Kilometre", "Mile"]);

        let (list, errors) =
            filter_unit_list(&declared, &entry(), &inherited, ir::UnitRelation::Units);

        assert_eq!(list.inclusions(), unit_names(&["Metre"]).as_slice());
        assert_eq!(
            errors,
            vec![
                UnitListError::UnknownUnitInstance {
                    relation: ir::UnitRelation::Units,
                    name: unit_name("Parsec"),
                    unit: ir::UnitIdentity::new(LENGTH_UNIT),
                },
                UnitListError::DuplicateListing {
                    relation: ir::UnitRelation::Units,
                    name: unit_name("Metre"),
                },
            ]
        );
    }

    #[test]
    fn exclusions_ignored_when_inclusions_declared() {
        let declared = ir::UnitList::new(unit_names(&["Metre"]), unit_names(&["Mile"]));
        let inherited = unit_set(&["Metre", "Kilometre", "Mile"]);

        let (list, errors) =
            filter_unit_list(&declared, &entry(), &inherited, ir::UnitRelation::UnitBases);

        assert_eq!(list.inclusions(), unit_names(&["Metre"]).as_slice());
        assert!(list.exclusions().is_empty());
        assert_eq!(
            errors,
            vec![UnitListError::ExclusionsIgnored {
                relation: ir::UnitRelation::UnitBases
            }]
        );
    }

    #[test]
    fn names_outside_inherited_set_have_no_effect() {
        let inherited = unit_set(&["Metre", "Kilometre"]);

        let included = ir::UnitList::including(unit_names(&["Mile", "Metre"]));
        let (list, errors) =
            filter_unit_list(&included, &entry(), &inherited, ir::UnitRelation::Units);
        assert_eq!(list.inclusions(), unit_names(&["Metre"]).as_slice());
        assert_eq!(
            errors,
            vec![UnitListError::InclusionHadNoEffect {
                relation: ir::UnitRelation::Units,
                name: unit_name("Mile"),
            }]
        );

        let excluded = ir::UnitList::excluding(unit_names(&["Mile"]));
        let (list, errors) =
            filter_unit_list(&excluded, &entry(), &inherited, ir::UnitRelation::Units);
        assert!(list.is_empty());
        assert_eq!(
            errors,
            vec![UnitListError::ExclusionHadNoEffect {
                relation: ir::UnitRelation::Units,
                name: unit_name("Mile"),
            }]
        );
    }
}
