//! Identity types for quantities, units and unit instances.
//!
//! Identities are opaque, comparable keys. The resolver uses them as map keys
//! everywhere instead of holding references between descriptors, so a
//! population is an arena indexed by `QuantityIdentity`.

use std::fmt;

/// The identity of a declared quantity, typically its fully-qualified name.
///
/// # Example
///
/// ```rust
/// use gauge_ir::QuantityIdentity;
///
/// let length = QuantityIdentity::new("Length");
/// assert_eq!(length.as_str(), "Length");
/// assert_eq!(length.to_string(), "Length");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantityIdentity(String);

impl QuantityIdentity {
    /// Creates a new quantity identity.
    pub fn new(identity: impl AsRef<str>) -> Self {
        Self(identity.as_ref().to_string())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuantityIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The identity of a unit of measure, such as `UnitOfLength`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitIdentity(String);

impl UnitIdentity {
    /// Creates a new unit identity.
    pub fn new(identity: impl AsRef<str>) -> Self {
        Self(identity.as_ref().to_string())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical name of a unit instance, unique within its unit.
///
/// # Example
///
/// ```rust
/// use gauge_ir::UnitInstanceName;
///
/// let metre = UnitInstanceName::new("Metre");
/// assert_eq!(metre.as_str(), "Metre");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitInstanceName(String);

impl UnitInstanceName {
    /// Creates a new unit instance name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_string())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitInstanceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
