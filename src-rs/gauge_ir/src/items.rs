//! List-valued entries a quantity can declare: derivations, constants and
//! conversions.

use crate::reference::{QuantityIdentity, UnitInstanceName};

/// A way of deriving the quantity from other quantities.
///
/// The expression is carried verbatim, for example `"{0} / {1}"`, with the
/// signature listing the quantities the placeholders refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    expression: String,
    signature: Vec<QuantityIdentity>,
}

impl Derivation {
    /// Creates a new derivation.
    pub fn new(expression: impl Into<String>, signature: Vec<QuantityIdentity>) -> Self {
        Self {
            expression: expression.into(),
            signature,
        }
    }

    /// Returns the derivation expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the quantities the expression refers to.
    #[must_use]
    pub fn signature(&self) -> &[QuantityIdentity] {
        &self.signature
    }
}

/// A named scalar constant, such as `("Metre", "m")`.
///
/// A constant is expressed in one unit instance. The optional `multiples`
/// name is a display name for multiples of the constant, for example
/// `"Metres"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    name: String,
    unit_instance: UnitInstanceName,
    value: f64,
    multiples: Option<String>,
}

impl Constant {
    /// Creates a new constant with a value of `1.0` and no multiples name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gauge_ir::{Constant, UnitInstanceName};
    ///
    /// let constant = Constant::new("Metre", UnitInstanceName::new("Metre"))
    ///     .with_multiples("Metres");
    ///
    /// assert_eq!(constant.name(), "Metre");
    /// assert_eq!(constant.multiples(), Some("Metres"));
    /// assert!((constant.value() - 1.0).abs() < f64::EPSILON);
    /// ```
    pub fn new(name: impl Into<String>, unit_instance: UnitInstanceName) -> Self {
        Self {
            name: name.into(),
            unit_instance,
            value: 1.0,
            multiples: None,
        }
    }

    /// Sets the value of the constant, in its unit instance.
    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Sets the display name used for multiples of the constant.
    #[must_use]
    pub fn with_multiples(mut self, multiples: impl Into<String>) -> Self {
        self.multiples = Some(multiples.into());
        self
    }

    /// Returns the name of the constant.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit instance the constant is expressed in.
    #[must_use]
    pub const fn unit_instance(&self) -> &UnitInstanceName {
        &self.unit_instance
    }

    /// Returns the value of the constant.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the display name for multiples of the constant.
    #[must_use]
    pub fn multiples(&self) -> Option<&str> {
        self.multiples.as_deref()
    }
}

/// Which way a conversion between two quantities may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConversionDirection {
    /// From the declaring quantity to the target.
    #[default]
    Onwards,
    /// From the target to the declaring quantity.
    Backwards,
    /// Both ways.
    Bidirectional,
}

/// A declared conversion to another quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    target: QuantityIdentity,
    direction: ConversionDirection,
}

impl Conversion {
    /// Creates a new conversion.
    #[must_use]
    pub const fn new(target: QuantityIdentity, direction: ConversionDirection) -> Self {
        Self { target, direction }
    }

    /// Returns the quantity converted to.
    #[must_use]
    pub const fn target(&self) -> &QuantityIdentity {
        &self.target
    }

    /// Returns the direction of the conversion.
    #[must_use]
    pub const fn direction(&self) -> ConversionDirection {
        self.direction
    }
}
