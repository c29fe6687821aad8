//! The unit catalog: every unit of measure and its named instances.

use indexmap::{IndexMap, IndexSet};

use crate::reference::{UnitIdentity, UnitInstanceName};

/// A single named instance of a unit, such as `Metre` of `UnitOfLength`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitInstance {
    name: UnitInstanceName,
    plural_form: String,
}

impl UnitInstance {
    /// Creates a new unit instance.
    pub fn new(name: UnitInstanceName, plural_form: impl Into<String>) -> Self {
        Self {
            name,
            plural_form: plural_form.into(),
        }
    }

    /// Returns the canonical name of the instance.
    #[must_use]
    pub const fn name(&self) -> &UnitInstanceName {
        &self.name
    }

    /// Returns the plural display form of the instance.
    #[must_use]
    pub fn plural_form(&self) -> &str {
        &self.plural_form
    }
}

/// The instances of one unit of measure, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCatalogEntry {
    unit: UnitIdentity,
    instances: IndexMap<UnitInstanceName, UnitInstance>,
}

impl UnitCatalogEntry {
    /// Creates a catalog entry for `unit`.
    ///
    /// Instance names are unique within a unit. If the same name is given
    /// twice, the first instance is kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gauge_ir::{UnitCatalogEntry, UnitIdentity, UnitInstance, UnitInstanceName};
    ///
    /// let entry = UnitCatalogEntry::new(
    ///     UnitIdentity::new("UnitOfLength"),
    ///     [
    ///         UnitInstance::new(UnitInstanceName::new("Metre"), "Metres"),
    ///         UnitInstance::new(UnitInstanceName::new("Kilometre"), "Kilometres"),
    ///     ],
    /// );
    ///
    /// assert!(entry.contains(&UnitInstanceName::new("Metre")));
    /// assert_eq!(entry.instance_names().len(), 2);
    /// ```
    pub fn new(unit: UnitIdentity, instances: impl IntoIterator<Item = UnitInstance>) -> Self {
        let mut by_name = IndexMap::new();

        for instance in instances {
            by_name.entry(instance.name.clone()).or_insert(instance);
        }

        Self {
            unit,
            instances: by_name,
        }
    }

    /// Returns the unit this entry describes.
    #[must_use]
    pub const fn unit(&self) -> &UnitIdentity {
        &self.unit
    }

    /// Looks up an instance by name.
    #[must_use]
    pub fn get_instance(&self, name: &UnitInstanceName) -> Option<&UnitInstance> {
        self.instances.get(name)
    }

    /// Returns whether the unit has an instance called `name`.
    #[must_use]
    pub fn contains(&self, name: &UnitInstanceName) -> bool {
        self.instances.contains_key(name)
    }

    /// Returns every instance, in declaration order.
    pub fn instances(&self) -> impl Iterator<Item = &UnitInstance> {
        self.instances.values()
    }

    /// Returns the names of every instance, in declaration order.
    #[must_use]
    pub fn instance_names(&self) -> IndexSet<UnitInstanceName> {
        self.instances.keys().cloned().collect()
    }
}

/// Every unit of measure known to a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnitCatalog {
    entries: IndexMap<UnitIdentity, UnitCatalogEntry>,
}

impl UnitCatalog {
    /// Creates a catalog from its entries. The first entry for a unit wins.
    pub fn new(entries: impl IntoIterator<Item = UnitCatalogEntry>) -> Self {
        let mut by_unit = IndexMap::new();

        for entry in entries {
            by_unit.entry(entry.unit.clone()).or_insert(entry);
        }

        Self { entries: by_unit }
    }

    /// Looks up the entry for a unit.
    #[must_use]
    pub fn get(&self, unit: &UnitIdentity) -> Option<&UnitCatalogEntry> {
        self.entries.get(unit)
    }

    /// Returns the number of units in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
