//! Human-readable output.
//!
//! Verdict lines are written only in verbose mode; usage errors are always
//! written. Everything goes to the writer handed in, normally stdout.

use std::io::{self, Write};

use fqdn_core::{FqdnError, HostKind};

use crate::cli::args::{usage, ArgsError};
use crate::config::Context;

/// Summary line for an accepted string.
pub const VALID_MESSAGE: &str = "The string is a valid FQDN.";

/// Summary line for a rejected string.
pub const INVALID_MESSAGE: &str = "The string is not a valid FQDN.";

/// Writes diagnostics according to the run's [`Context`].
pub struct Reporter<'a, W: Write> {
    out: &'a mut W,
    context: Context,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(out: &'a mut W, context: Context) -> Self {
        Self { out, context }
    }

    /// Report the outcome of a validation.
    ///
    /// On failure the specific diagnostic precedes the summary line.
    pub fn verdict(&mut self, verdict: &Result<HostKind, FqdnError>) -> io::Result<()> {
        if !self.context.verbosity.is_verbose() {
            return Ok(());
        }

        match verdict {
            Ok(_) => writeln!(self.out, "{VALID_MESSAGE}"),
            Err(err) => {
                writeln!(self.out, "{err}")?;
                writeln!(self.out, "{INVALID_MESSAGE}")
            }
        }
    }

    /// Report malformed arguments, followed by the usage line.
    pub fn args_error(&mut self, err: &ArgsError, program: &str) -> io::Result<()> {
        writeln!(self.out, "Error: {err}")?;
        writeln!(self.out, "{}", usage(program))
    }
}
