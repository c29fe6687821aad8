//! Validation of the entries each level of a chain declares.
//!
//! Filters never fail. An invalid entry is dropped from the level it was
//! declared on and reported, and resolution carries on with the rest.

use indexmap::IndexMap;

use gauge_ir as ir;

pub mod constant;
pub mod conversion;
pub mod derivation;
pub mod traits;
pub mod unit_list;

/// The valid entries of every level of a chain, keyed by level.
pub type LevelEntries<T> = IndexMap<ir::QuantityIdentity, Vec<T>>;
