//! Error collection for a snapshot resolution.

use indexmap::{IndexMap, IndexSet};

use gauge_ir::QuantityIdentity;
use gauge_shared::error::Diagnostic;

use crate::error::ResolutionError;

/// The errors raised while resolving a snapshot, keyed by the quantity that
/// declared the offending entry.
///
/// Quantities that were dropped from the output entirely are tracked
/// separately from quantities that resolved with some entries rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolutionErrorMap {
    errors: IndexMap<QuantityIdentity, Vec<ResolutionError>>,
    dropped: IndexSet<QuantityIdentity>,
}

impl ResolutionErrorMap {
    /// Creates a new empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the errors of every quantity, in the order they were raised.
    #[must_use]
    pub const fn get_errors(&self) -> &IndexMap<QuantityIdentity, Vec<ResolutionError>> {
        &self.errors
    }

    /// Returns the errors raised for one quantity.
    #[must_use]
    pub fn get_quantity_errors(&self, identity: &QuantityIdentity) -> &[ResolutionError] {
        self.errors.get(identity).map_or(&[], Vec::as_slice)
    }

    /// Returns the quantities that were dropped from the output.
    #[must_use]
    pub const fn get_dropped(&self) -> &IndexSet<QuantityIdentity> {
        &self.dropped
    }

    /// Returns whether no error was raised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.dropped.is_empty()
    }

    /// Returns the total number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Converts every error into a [`Diagnostic`] attached to its quantity.
    #[must_use]
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        self.errors
            .iter()
            .flat_map(|(identity, errors)| {
                errors
                    .iter()
                    .map(move |error| Diagnostic::from_error(error, identity.as_str()))
            })
            .collect()
    }

    /// Adds an error for the specified quantity.
    pub(crate) fn add_error(
        &mut self,
        identity: QuantityIdentity,
        error: impl Into<ResolutionError>,
    ) {
        self.errors.entry(identity).or_default().push(error.into());
    }

    /// Adds several errors for the specified quantity.
    pub(crate) fn add_errors(
        &mut self,
        identity: &QuantityIdentity,
        errors: impl IntoIterator<Item = ResolutionError>,
    ) {
        let mut errors = errors.into_iter().peekable();

        if errors.peek().is_some() {
            self.errors
                .entry(identity.clone())
                .or_default()
                .extend(errors);
        }
    }

    /// Marks the specified quantity as dropped from the output.
    pub(crate) fn add_dropped(&mut self, identity: QuantityIdentity) {
        self.dropped.insert(identity);
    }
}
