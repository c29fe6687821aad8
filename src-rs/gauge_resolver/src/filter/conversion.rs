//! Validation of declared conversions.

use indexmap::IndexMap;

use gauge_ir as ir;

use crate::{error::ConversionError, filter::LevelEntries, util::context::QuantityContext};

/// Filters the conversions of every level visible to `identity`.
///
/// Levels are checked from the topmost visible ancestor down, so a target
/// listed by an ancestor is a duplicate when listed again below it. Only the
/// errors of `identity`'s own conversions are returned.
#[must_use]
pub fn filter_conversions(
    context: &QuantityContext<'_>,
    identity: &ir::QuantityIdentity,
) -> (LevelEntries<ir::Conversion>, Vec<ConversionError>) {
    let mut levels = LevelEntries::new();
    let mut errors = Vec::new();
    let mut listed: IndexMap<ir::QuantityIdentity, ir::QuantityIdentity> = IndexMap::new();

    let chain = context
        .population()
        .inheritance_chain(identity, ir::Inheritance::conversions);

    for level in chain.into_iter().rev() {
        let mut kept = Vec::new();
        let mut level_errors = Vec::new();

        for conversion in level.declarations().conversions() {
            match check_conversion(context, level.identity(), conversion, &listed) {
                Ok(()) => {
                    listed.insert(conversion.target().clone(), level.identity().clone());
                    kept.push(conversion.clone());
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

fn check_conversion(
    context: &QuantityContext<'_>,
    source: &ir::QuantityIdentity,
    conversion: &ir::Conversion,
    listed: &IndexMap<ir::QuantityIdentity, ir::QuantityIdentity>,
) -> Result<(), ConversionError> {
    let target = conversion.target();

    if target == source {
        return Err(ConversionError::ConversionToSelf);
    }

    let Some(target_base) = context.resolvable_base(target) else {
        return Err(ConversionError::UnknownTarget {
            target: target.clone(),
        });
    };

    if let Some(declared_by) = listed.get(target) {
        return Err(ConversionError::Duplicate {
            target: target.clone(),
            declared_by: declared_by.clone(),
        });
    }

    if target_base.use_unit_bias() != context.use_unit_bias() {
        return Err(ConversionError::BiasMismatch {
            target: target.clone(),
            source_biased: context.use_unit_bias(),
        });
    }

    Ok(())
}
