//! Helper functions for creating test data
//!
//! Declaring quantities by hand is repetitive. These helpers build the common
//! shapes used throughout the resolver tests: length-like quantities backed by
//! a single `UnitOfLength` catalog entry.

use indexmap::IndexSet;

use gauge_ir as ir;

use crate::population::Population;

pub const LENGTH_UNIT: &str = "UnitOfLength";

// SIMPLE CONSTRUCTORS

pub fn id(name: &str) -> ir::QuantityIdentity {
    ir::QuantityIdentity::new(name)
}

pub fn unit_name(name: &str) -> ir::UnitInstanceName {
    ir::UnitInstanceName::new(name)
}

pub fn unit_names(names: &[&str]) -> Vec<ir::UnitInstanceName> {
    names.iter().copied().map(unit_name).collect()
}

pub fn unit_set(names: &[&str]) -> IndexSet<ir::UnitInstanceName> {
    names.iter().copied().map(unit_name).collect()
}

pub fn including(names: &[&str]) -> ir::UnitList {
    ir::UnitList::including(unit_names(names))
}

pub fn excluding(names: &[&str]) -> ir::UnitList {
    ir::UnitList::excluding(unit_names(names))
}

pub fn constant(name: &str, unit: &str) -> ir::Constant {
    ir::Constant::new(name, unit_name(unit))
}

pub fn conversion(target: &str) -> ir::Conversion {
    ir::Conversion::new(id(target), ir::ConversionDirection::Onwards)
}

pub fn derivation(expression: &str, signature: &[&str]) -> ir::Derivation {
    ir::Derivation::new(expression, signature.iter().copied().map(id).collect())
}

/// A base quantity declared against `UnitOfLength`.
pub fn base(name: &str) -> ir::QuantityBase {
    ir::QuantityBase::new(id(name), ir::UnitIdentity::new(LENGTH_UNIT))
}

pub fn specialization(name: &str, original: &str) -> ir::QuantitySpecialization {
    ir::QuantitySpecialization::new(id(name), id(original))
}

/// A catalog holding only `UnitOfLength`, with the plural of every instance
/// formed by appending `s`.
pub fn length_catalog(instances: &[&str]) -> ir::UnitCatalog {
    let instances = instances
        .iter()
        .map(|name| ir::UnitInstance::new(unit_name(name), format!("{name}s")));

    ir::UnitCatalog::new([ir::UnitCatalogEntry::new(
        ir::UnitIdentity::new(LENGTH_UNIT),
        instances,
    )])
}

pub fn link(
    bases: Vec<ir::QuantityBase>,
    specializations: Vec<ir::QuantitySpecialization>,
) -> Population {
    Population::link(bases, specializations).expect("population should link")
}

// BUILDERS

/// Builds the declarations of one quantity.
pub struct DeclarationsBuilder {
    declarations: ir::QuantityDeclarations,
}

impl DeclarationsBuilder {
    pub fn new() -> Self {
        Self {
            declarations: ir::QuantityDeclarations::new(),
        }
    }

    pub fn with_traits(mut self, traits: ir::TraitSet) -> Self {
        self.declarations = self.declarations.with_traits(traits);
        self
    }

    pub fn with_constants(mut self, constants: Vec<ir::Constant>) -> Self {
        self.declarations = self.declarations.with_constants(constants);
        self
    }

    pub fn with_conversions(mut self, conversions: Vec<ir::Conversion>) -> Self {
        self.declarations = self.declarations.with_conversions(conversions);
        self
    }

    pub fn with_derivations(mut self, derivations: Vec<ir::Derivation>) -> Self {
        self.declarations = self.declarations.with_derivations(derivations);
        self
    }

    pub fn with_units(mut self, list: ir::UnitList) -> Self {
        self.declarations = self
            .declarations
            .with_unit_list(ir::UnitRelation::Units, list);
        self
    }

    pub fn with_unit_bases(mut self, list: ir::UnitList) -> Self {
        self.declarations = self
            .declarations
            .with_unit_list(ir::UnitRelation::UnitBases, list);
        self
    }

    pub fn build(self) -> ir::QuantityDeclarations {
        self.declarations
    }
}
