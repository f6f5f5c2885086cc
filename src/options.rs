/// Switches that change what a run checks.
///
/// Built once by the CLI and passed by reference to every validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Apply naming and agent-header checks on top of the required-field rules.
    pub strict: bool,
}

impl Options {
    /// Options with strict checks enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self { strict: true }
    }
}
