//! Error handling for the quantity resolver.
//!
//! Every error category implements [`AsDiagnostic`], so each rejection can be
//! reported with a stable reason code. None of them abort resolution: a
//! rejected entry is discarded and the rest of the quantity still resolves.

use std::fmt;

use gauge_shared::error::{AsDiagnostic, Context};

pub mod collection;
mod constant;
mod conversion;
mod derivation;
mod link;
mod quantity;
mod traits;
mod unit_list;

pub use constant::ConstantError;
pub use conversion::ConversionError;
pub use derivation::DerivationError;
pub use link::{AncestorState, LinkError};
pub use quantity::QuantityError;
pub use traits::TraitError;
pub use unit_list::UnitListError;

/// Any error raised while linking or resolving a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The quantity could not be linked into the population.
    Link(LinkError),
    /// The quantity could not be resolved at all.
    Quantity(QuantityError),
    /// A declared trait was rejected.
    Trait(TraitError),
    /// A declared derivation was rejected.
    Derivation(DerivationError),
    /// A declared constant was rejected.
    Constant(ConstantError),
    /// A declared conversion was rejected.
    Conversion(ConversionError),
    /// An entry of an inclusion or exclusion list was rejected.
    UnitList(UnitListError),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(error) => error.fmt(f),
            Self::Quantity(error) => error.fmt(f),
            Self::Trait(error) => error.fmt(f),
            Self::Derivation(error) => error.fmt(f),
            Self::Constant(error) => error.fmt(f),
            Self::Conversion(error) => error.fmt(f),
            Self::UnitList(error) => error.fmt(f),
        }
    }
}

impl AsDiagnostic for ResolutionError {
    fn code(&self) -> &'static str {
        match self {
            Self::Link(error) => error.code(),
            Self::Quantity(error) => error.code(),
            Self::Trait(error) => error.code(),
            Self::Derivation(error) => error.code(),
            Self::Constant(error) => error.code(),
            Self::Conversion(error) => error.code(),
            Self::UnitList(error) => error.code(),
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Link(error) => error.context(),
            Self::Quantity(error) => error.context(),
            Self::Trait(error) => error.context(),
            Self::Derivation(error) => error.context(),
            Self::Constant(error) => error.context(),
            Self::Conversion(error) => error.context(),
            Self::UnitList(error) => error.context(),
        }
    }
}

impl From<LinkError> for ResolutionError {
    fn from(error: LinkError) -> Self {
        Self::Link(error)
    }
}

impl From<QuantityError> for ResolutionError {
    fn from(error: QuantityError) -> Self {
        Self::Quantity(error)
    }
}

impl From<TraitError> for ResolutionError {
    fn from(error: TraitError) -> Self {
        Self::Trait(error)
    }
}

impl From<DerivationError> for ResolutionError {
    fn from(error: DerivationError) -> Self {
        Self::Derivation(error)
    }
}

impl From<ConstantError> for ResolutionError {
    fn from(error: ConstantError) -> Self {
        Self::Constant(error)
    }
}

impl From<ConversionError> for ResolutionError {
    fn from(error: ConversionError) -> Self {
        Self::Conversion(error)
    }
}

impl From<UnitListError> for ResolutionError {
    fn from(error: UnitListError) -> Self {
        Self::UnitList(error)
    }
}

/// Converts a list of category errors into resolution errors.
pub fn convert_errors<E>(errors: impl IntoIterator<Item = E>) -> Vec<ResolutionError>
where
    E: Into<ResolutionError>,
{
    errors.into_iter().map(Into::into).collect()
}
