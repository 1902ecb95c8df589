//! Argument handling and dispatch.

pub mod args;

use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use fqdn_core::classify_host;

use crate::config::Context;
use crate::output::Reporter;
use args::Invocation;

/// Program name used in the usage line when argv is empty.
const DEFAULT_PROGRAM: &str = "fqdn";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The string is an IP literal or a valid FQDN.
    Valid,
    /// The string failed validation.
    Invalid,
    /// The arguments were malformed.
    Usage,
}

impl Outcome {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid | Self::Usage => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        Self::from(outcome.exit_code())
    }
}

/// Run the CLI against the process arguments and stdout.
pub fn run() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_with(std::env::args_os(), &mut out) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run the CLI against `args` (program name first), writing to `out`.
pub fn run_with<I, T, W>(args: I, out: &mut W) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map_or_else(|| DEFAULT_PROGRAM.to_string(), |p| p.to_string_lossy().into_owned());

    let invocation = match Invocation::parse_from(args) {
        Ok(invocation) => invocation,
        Err(err) => {
            Reporter::new(out, Context::default())
                .args_error(&err, &program)
                .context("failed to write usage")?;
            return Ok(Outcome::Usage);
        }
    };

    let verdict = classify_host(&invocation.target);
    Reporter::new(out, invocation.context)
        .verdict(&verdict)
        .context("failed to write verdict")?;

    Ok(if verdict.is_ok() {
        Outcome::Valid
    } else {
        Outcome::Invalid
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (Outcome, String) {
        let mut buf = Vec::new();
        let outcome = run_with(args.iter().copied(), &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn quiet_runs_print_nothing() {
        assert_eq!(run_args(&["fqdn", "example.com"]), (Outcome::Valid, String::new()));
        assert_eq!(run_args(&["fqdn", "192.168.1.1"]), (Outcome::Valid, String::new()));
        assert_eq!(run_args(&["fqdn", "::1"]), (Outcome::Valid, String::new()));
        assert_eq!(run_args(&["fqdn", "example.com1"]), (Outcome::Invalid, String::new()));
    }

    #[test]
    fn verbose_failure() {
        let (outcome, text) = run_args(&["fqdn", "-v", "sub..example.com"]);
        assert_eq!(outcome, Outcome::Invalid);
        assert_eq!(
            text,
            "Invalid characters found in string\nThe string is not a valid FQDN.\n"
        );
    }

    #[test]
    fn usage_errors() {
        let (outcome, text) = run_args(&["fqdn"]);
        assert_eq!(outcome, Outcome::Usage);
        assert!(text.ends_with("Usage: fqdn [-v] <string-to-validate>\n"));

        let (outcome, text) = run_args(&["/usr/bin/fqdn", "-q", "example.com"]);
        assert_eq!(outcome, Outcome::Usage);
        assert_eq!(
            text,
            "Error: Invalid first argument '-q'\nUsage: /usr/bin/fqdn [-v] <string-to-validate>\n"
        );
    }

    #[test]
    fn double_dash_reaches_argument_checks() {
        assert_eq!(run_args(&["fqdn", "--"]), (Outcome::Invalid, String::new()));

        let (outcome, text) = run_args(&["fqdn", "--", "example.com"]);
        assert_eq!(outcome, Outcome::Usage);
        assert!(text.starts_with("Error: Invalid first argument '--'\n"));

        let (outcome, text) = run_args(&["fqdn", "--", "-v", "x.com"]);
        assert_eq!(outcome, Outcome::Usage);
        assert!(text.starts_with("Error: Wrong number of arguments\n"));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Outcome::Valid.exit_code(), 0);
        assert_eq!(Outcome::Invalid.exit_code(), 1);
        assert_eq!(Outcome::Usage.exit_code(), 1);
    }
}
