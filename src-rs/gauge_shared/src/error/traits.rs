use crate::error::Context;

/// Trait for types that can be reported as Gauge diagnostics.
///
/// Every error category raised by the resolver implements this trait so that
/// hosts can surface diagnostics uniformly without knowing the concrete error
/// type.
pub trait AsDiagnostic {
    /// Returns the stable reason code of the diagnostic.
    ///
    /// Reason codes never change between releases, so hosts may key
    /// suppressions or documentation links on them.
    fn code(&self) -> &'static str;

    /// Returns the primary, human readable message.
    fn message(&self) -> String;

    /// Returns additional context about the diagnostic.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
