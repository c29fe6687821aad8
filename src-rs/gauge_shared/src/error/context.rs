/// Additional information attached to a diagnostic.
///
/// Context helps the reader of a diagnostic understand where a rejected
/// declaration came from and how it might be fixed.
///
/// # Examples
///
/// ```rust
/// use gauge_shared::error::Context;
///
/// let note = Context::Note("`Distance` already inherits the constant `Metre`".to_string());
/// let help = Context::Help("rename the constant or disable constant inheritance".to_string());
///
/// let contexts = vec![note, help];
/// assert_eq!(contexts.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Supplementary information about the diagnostic, such as the ancestor
    /// that originally declared a conflicting entry.
    Note(String),

    /// An actionable suggestion for resolving the diagnostic.
    Help(String),
}

impl Context {
    /// Returns the text carried by this context item.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Note(text) | Self::Help(text) => text,
        }
    }
}
