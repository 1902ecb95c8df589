//! Run configuration.
//!
//! There are no config files or environment variables; everything comes from
//! argv and is passed explicitly to whatever prints.

/// How much the CLI prints besides its exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Exit status only.
    #[default]
    Quiet,
    /// Diagnostic and summary lines on stdout.
    Verbose,
}

impl Verbosity {
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Settings for a single invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
}

impl Context {
    pub const fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}
