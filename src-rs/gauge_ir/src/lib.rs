#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Data model for declared and resolved quantities

mod items;
mod quantity;
mod reference;
mod resolved;
mod traits;
mod unit;
mod unit_list;

pub use items::{Constant, Conversion, ConversionDirection, Derivation};
pub use quantity::{
    Inheritance, QuantityBase, QuantityDeclarations, QuantityDescriptor, QuantitySpecialization,
};
pub use reference::{QuantityIdentity, UnitIdentity, UnitInstanceName};
pub use resolved::{ResolvedQuantity, ResolvedQuantityCollection};
pub use traits::{AssociatedQuantity, ResolvedTraits, TraitSet};
pub use unit::{UnitCatalog, UnitCatalogEntry, UnitInstance};
pub use unit_list::{UnitList, UnitRelation};
