//! Single-valued quantity traits.
//!
//! A `TraitSet` is three-valued per field: a field that is `None` on a
//! specialization means "not declared here, keep searching the ancestors",
//! while `Some` stops the search. On a base quantity every field is final,
//! so `None` there means "absent" (or "use the configured default" for the
//! boolean traits).

use std::fmt;

use crate::reference::{QuantityIdentity, UnitInstanceName};

/// The traits that name another quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociatedQuantity {
    /// The vector quantity associated with a scalar.
    Vector,
    /// The reciprocal of the quantity.
    Reciprocal,
    /// The square of the quantity.
    Square,
    /// The cube of the quantity.
    Cube,
    /// The square root of the quantity.
    SquareRoot,
    /// The cube root of the quantity.
    CubeRoot,
    /// The quantity that describes a difference between two values.
    Difference,
}

impl AssociatedQuantity {
    /// Every associated-quantity trait, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Vector,
        Self::Reciprocal,
        Self::Square,
        Self::Cube,
        Self::SquareRoot,
        Self::CubeRoot,
        Self::Difference,
    ];

    /// Returns the name used for the trait in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::Reciprocal => "reciprocal",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::SquareRoot => "square root",
            Self::CubeRoot => "cube root",
            Self::Difference => "difference",
        }
    }
}

impl fmt::Display for AssociatedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The traits declared directly on one quantity.
///
/// # Example
///
/// ```rust
/// use gauge_ir::{AssociatedQuantity, QuantityIdentity, TraitSet};
///
/// let traits = TraitSet::new()
///     .with_associated(AssociatedQuantity::Reciprocal, QuantityIdentity::new("SpatialFrequency"))
///     .with_implement_sum(false);
///
/// assert_eq!(
///     traits.associated(AssociatedQuantity::Reciprocal).map(QuantityIdentity::as_str),
///     Some("SpatialFrequency"),
/// );
/// assert_eq!(traits.implement_sum(), Some(false));
/// assert_eq!(traits.implement_difference(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraitSet {
    vector: Option<QuantityIdentity>,
    reciprocal: Option<QuantityIdentity>,
    square: Option<QuantityIdentity>,
    cube: Option<QuantityIdentity>,
    square_root: Option<QuantityIdentity>,
    cube_root: Option<QuantityIdentity>,
    difference: Option<QuantityIdentity>,
    implement_sum: Option<bool>,
    implement_difference: Option<bool>,
    default_unit_name: Option<UnitInstanceName>,
    default_unit_symbol: Option<String>,
    generate_documentation: Option<bool>,
}

impl TraitSet {
    /// Creates a trait set with nothing declared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an associated quantity.
    #[must_use]
    pub fn with_associated(mut self, kind: AssociatedQuantity, quantity: QuantityIdentity) -> Self {
        *self.associated_mut(kind) = Some(quantity);
        self
    }

    /// Declares whether the quantity implements addition.
    #[must_use]
    pub const fn with_implement_sum(mut self, implement_sum: bool) -> Self {
        self.implement_sum = Some(implement_sum);
        self
    }

    /// Declares whether the quantity implements subtraction.
    #[must_use]
    pub const fn with_implement_difference(mut self, implement_difference: bool) -> Self {
        self.implement_difference = Some(implement_difference);
        self
    }

    /// Declares the default unit instance name.
    #[must_use]
    pub fn with_default_unit_name(mut self, name: UnitInstanceName) -> Self {
        self.default_unit_name = Some(name);
        self
    }

    /// Declares the default unit symbol.
    #[must_use]
    pub fn with_default_unit_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.default_unit_symbol = Some(symbol.into());
        self
    }

    /// Declares whether documentation should be generated.
    #[must_use]
    pub const fn with_generate_documentation(mut self, generate_documentation: bool) -> Self {
        self.generate_documentation = Some(generate_documentation);
        self
    }

    /// Returns the declared associated quantity of the given kind.
    #[must_use]
    pub const fn associated(&self, kind: AssociatedQuantity) -> Option<&QuantityIdentity> {
        match kind {
            AssociatedQuantity::Vector => self.vector.as_ref(),
            AssociatedQuantity::Reciprocal => self.reciprocal.as_ref(),
            AssociatedQuantity::Square => self.square.as_ref(),
            AssociatedQuantity::Cube => self.cube.as_ref(),
            AssociatedQuantity::SquareRoot => self.square_root.as_ref(),
            AssociatedQuantity::CubeRoot => self.cube_root.as_ref(),
            AssociatedQuantity::Difference => self.difference.as_ref(),
        }
    }

    const fn associated_mut(&mut self, kind: AssociatedQuantity) -> &mut Option<QuantityIdentity> {
        match kind {
            AssociatedQuantity::Vector => &mut self.vector,
            AssociatedQuantity::Reciprocal => &mut self.reciprocal,
            AssociatedQuantity::Square => &mut self.square,
            AssociatedQuantity::Cube => &mut self.cube,
            AssociatedQuantity::SquareRoot => &mut self.square_root,
            AssociatedQuantity::CubeRoot => &mut self.cube_root,
            AssociatedQuantity::Difference => &mut self.difference,
        }
    }

    /// Returns whether addition is declared.
    #[must_use]
    pub const fn implement_sum(&self) -> Option<bool> {
        self.implement_sum
    }

    /// Returns whether subtraction is declared.
    #[must_use]
    pub const fn implement_difference(&self) -> Option<bool> {
        self.implement_difference
    }

    /// Returns the declared default unit instance name.
    #[must_use]
    pub const fn default_unit_name(&self) -> Option<&UnitInstanceName> {
        self.default_unit_name.as_ref()
    }

    /// Returns the declared default unit symbol.
    #[must_use]
    pub fn default_unit_symbol(&self) -> Option<&str> {
        self.default_unit_symbol.as_deref()
    }

    /// Returns whether documentation generation is declared.
    #[must_use]
    pub const fn generate_documentation(&self) -> Option<bool> {
        self.generate_documentation
    }

    /// Removes a declared associated quantity.
    pub fn clear_associated(&mut self, kind: AssociatedQuantity) {
        *self.associated_mut(kind) = None;
    }

    /// Removes both halves of the declared default unit.
    pub fn clear_default_unit(&mut self) {
        self.default_unit_name = None;
        self.default_unit_symbol = None;
    }
}

/// The traits of a quantity after resolution.
///
/// Boolean traits are always defined. Associated quantities stay optional,
/// except the difference quantity, which defaults to the quantity itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTraits {
    vector: Option<QuantityIdentity>,
    reciprocal: Option<QuantityIdentity>,
    square: Option<QuantityIdentity>,
    cube: Option<QuantityIdentity>,
    square_root: Option<QuantityIdentity>,
    cube_root: Option<QuantityIdentity>,
    difference: QuantityIdentity,
    implement_sum: bool,
    implement_difference: bool,
    default_unit_name: Option<UnitInstanceName>,
    default_unit_symbol: Option<String>,
    generate_documentation: bool,
}

impl ResolvedTraits {
    /// Creates resolved traits where every associated quantity but the
    /// difference is absent and no default unit is set.
    #[must_use]
    pub const fn new(
        difference: QuantityIdentity,
        implement_sum: bool,
        implement_difference: bool,
        generate_documentation: bool,
    ) -> Self {
        Self {
            vector: None,
            reciprocal: None,
            square: None,
            cube: None,
            square_root: None,
            cube_root: None,
            difference,
            implement_sum,
            implement_difference,
            default_unit_name: None,
            default_unit_symbol: None,
            generate_documentation,
        }
    }

    /// Sets an associated quantity. Setting [`AssociatedQuantity::Difference`]
    /// to `None` is ignored, since the difference quantity is always defined.
    #[must_use]
    pub fn with_associated(
        mut self,
        kind: AssociatedQuantity,
        quantity: Option<QuantityIdentity>,
    ) -> Self {
        match kind {
            AssociatedQuantity::Vector => self.vector = quantity,
            AssociatedQuantity::Reciprocal => self.reciprocal = quantity,
            AssociatedQuantity::Square => self.square = quantity,
            AssociatedQuantity::Cube => self.cube = quantity,
            AssociatedQuantity::SquareRoot => self.square_root = quantity,
            AssociatedQuantity::CubeRoot => self.cube_root = quantity,
            AssociatedQuantity::Difference => {
                if let Some(quantity) = quantity {
                    self.difference = quantity;
                }
            }
        }
        self
    }

    /// Sets the default unit name and symbol.
    #[must_use]
    pub fn with_default_unit(
        mut self,
        name: Option<UnitInstanceName>,
        symbol: Option<String>,
    ) -> Self {
        self.default_unit_name = name;
        self.default_unit_symbol = symbol;
        self
    }

    /// Returns the resolved associated quantity of the given kind.
    #[must_use]
    pub const fn associated(&self, kind: AssociatedQuantity) -> Option<&QuantityIdentity> {
        match kind {
            AssociatedQuantity::Vector => self.vector.as_ref(),
            AssociatedQuantity::Reciprocal => self.reciprocal.as_ref(),
            AssociatedQuantity::Square => self.square.as_ref(),
            AssociatedQuantity::Cube => self.cube.as_ref(),
            AssociatedQuantity::SquareRoot => self.square_root.as_ref(),
            AssociatedQuantity::CubeRoot => self.cube_root.as_ref(),
            AssociatedQuantity::Difference => Some(&self.difference),
        }
    }

    /// Returns the difference quantity.
    #[must_use]
    pub const fn difference(&self) -> &QuantityIdentity {
        &self.difference
    }

    /// Returns whether the quantity implements addition.
    #[must_use]
    pub const fn implement_sum(&self) -> bool {
        self.implement_sum
    }

    /// Returns whether the quantity implements subtraction.
    #[must_use]
    pub const fn implement_difference(&self) -> bool {
        self.implement_difference
    }

    /// Returns the default unit instance name.
    #[must_use]
    pub const fn default_unit_name(&self) -> Option<&UnitInstanceName> {
        self.default_unit_name.as_ref()
    }

    /// Returns the default unit symbol.
    #[must_use]
    pub fn default_unit_symbol(&self) -> Option<&str> {
        self.default_unit_symbol.as_deref()
    }

    /// Returns whether documentation should be generated.
    #[must_use]
    pub const fn generate_documentation(&self) -> bool {
        self.generate_documentation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_an_associated_quantity_leaves_the_others() {
        let mut traits = TraitSet::new()
            .with_associated(AssociatedQuantity::Square, QuantityIdentity::new("Area"))
            .with_associated(AssociatedQuantity::Cube, QuantityIdentity::new("Volume"));

        traits.clear_associated(AssociatedQuantity::Square);

        assert_eq!(traits.associated(AssociatedQuantity::Square), None);
        assert_eq!(
            traits.associated(AssociatedQuantity::Cube),
            Some(&QuantityIdentity::new("Volume"))
        );
    }

    #[test]
    fn resolved_difference_cannot_be_unset() {
        let traits = ResolvedTraits::new(QuantityIdentity::new("Length"), true, true, true)
            .with_associated(AssociatedQuantity::Difference, None);

        assert_eq!(traits.difference(), &QuantityIdentity::new("Length"));
    }
}
