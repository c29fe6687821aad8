//! Configuration for a resolution run.

/// Defaults applied when no level of a specialization chain declares a
/// boolean trait.
///
/// # Example
///
/// ```rust
/// use gauge_resolver::ResolverOptions;
///
/// let options = ResolverOptions::default().with_generate_documentation(false);
///
/// assert!(!options.generate_documentation());
/// assert!(options.implement_sum());
/// assert!(options.implement_difference());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolverOptions {
    generate_documentation: bool,
    implement_sum: bool,
    implement_difference: bool,
}

impl ResolverOptions {
    /// Creates options with every default enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generate_documentation: true,
            implement_sum: true,
            implement_difference: true,
        }
    }

    /// Sets whether documentation is generated when nothing declares it.
    #[must_use]
    pub const fn with_generate_documentation(mut self, generate_documentation: bool) -> Self {
        self.generate_documentation = generate_documentation;
        self
    }

    /// Sets whether addition is implemented when nothing declares it.
    #[must_use]
    pub const fn with_implement_sum(mut self, implement_sum: bool) -> Self {
        self.implement_sum = implement_sum;
        self
    }

    /// Sets whether subtraction is implemented when nothing declares it.
    #[must_use]
    pub const fn with_implement_difference(mut self, implement_difference: bool) -> Self {
        self.implement_difference = implement_difference;
        self
    }

    /// Returns whether documentation is generated when nothing declares it.
    #[must_use]
    pub const fn generate_documentation(&self) -> bool {
        self.generate_documentation
    }

    /// Returns whether addition is implemented when nothing declares it.
    #[must_use]
    pub const fn implement_sum(&self) -> bool {
        self.implement_sum
    }

    /// Returns whether subtraction is implemented when nothing declares it.
    #[must_use]
    pub const fn implement_difference(&self) -> bool {
        self.implement_difference
    }
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::new()
    }
}
