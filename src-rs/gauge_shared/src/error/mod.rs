//! Diagnostics for the Gauge quantity resolver

mod context;
mod traits;

use std::fmt;

pub use context::Context;
pub use traits::AsDiagnostic;

/// Unified diagnostic representation for Gauge
///
/// This struct represents a diagnostic in a format suitable for hosts to
/// display. It records the quantity the diagnostic is about, the stable
/// reason code, a human-readable message and any additional context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The quantity the diagnostic is attached to
    subject: String,
    /// Stable reason code
    code: &'static str,
    /// Human-readable message
    message: String,
    /// Optional context information
    context: Vec<Context>,
}

impl Diagnostic {
    /// Creates a new `Diagnostic` from an error that implements `AsDiagnostic`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gauge_shared::error::{AsDiagnostic, Diagnostic};
    ///
    /// struct UnknownUnit(String);
    ///
    /// impl AsDiagnostic for UnknownUnit {
    ///     fn code(&self) -> &'static str {
    ///         "missing-unit"
    ///     }
    ///
    ///     fn message(&self) -> String {
    ///         format!("unit `{}` is not in the catalog", self.0)
    ///     }
    /// }
    ///
    /// let error = UnknownUnit("UnitOfLength".to_string());
    /// let diagnostic = Diagnostic::from_error(&error, "Length");
    ///
    /// assert_eq!(diagnostic.code(), "missing-unit");
    /// assert_eq!(diagnostic.subject(), "Length");
    /// ```
    pub fn from_error(error: &impl AsDiagnostic, subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            code: error.code(),
            message: error.message(),
            context: error.context(),
        }
    }

    /// Returns the quantity the diagnostic is attached to
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the stable reason code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context information
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.subject, self.message)?;

        for context in &self.context {
            match context {
                Context::Note(note) => write!(f, "\n  note: {note}")?,
                Context::Help(help) => write!(f, "\n  help: {help}")?,
            }
        }

        Ok(())
    }
}
