//! Command-line argument definitions using clap.
//!
//! The accepted shape is fixed: one argument, or exactly `-v` followed by one
//! argument. Clap collects the raw words and [`Invocation::from_cli`] enforces
//! the shape, so a target that looks like a flag (`-example.com`) still
//! reaches the validator.

use clap::Parser;
use std::ffi::OsString;
use thiserror::Error;

use crate::config::{Context, Verbosity};

/// Flag that enables verbose output. Only valid as the first of two arguments.
pub const VERBOSE_FLAG: &str = "-v";

/// Clap's end-of-options marker.
const END_OF_OPTIONS: &str = "--";

/// Check that a string is a valid FQDN or IP literal
#[derive(Parser, Debug)]
#[command(name = "fqdn")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// `[-v] <string-to-validate>`
    #[arg(
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub words: Vec<OsString>,
}

/// Argument errors. Each one is followed by the usage line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Wrong number of arguments")]
    WrongCount,

    #[error("Invalid first argument '{0}'")]
    InvalidFirst(String),
}

/// A well-formed request to validate one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The string to validate
    pub target: String,

    /// Settings derived from the flags
    pub context: Context,
}

impl Invocation {
    /// Interpret the collected words.
    ///
    /// Non-UTF-8 input is converted lossily; the replacement character is
    /// not ASCII, so such input can never validate.
    pub fn from_cli(cli: Cli) -> Result<Self, ArgsError> {
        let mut words = cli.words.into_iter();

        match (words.next(), words.next(), words.next()) {
            (Some(target), None, None) => Ok(Self {
                target: target.to_string_lossy().into_owned(),
                context: Context::default(),
            }),
            (Some(flag), Some(target), None) => {
                if flag.to_str() != Some(VERBOSE_FLAG) {
                    return Err(ArgsError::InvalidFirst(flag.to_string_lossy().into_owned()));
                }
                Ok(Self {
                    target: target.to_string_lossy().into_owned(),
                    context: Context::new(Verbosity::Verbose),
                })
            }
            _ => Err(ArgsError::WrongCount),
        }
    }

    /// Parse a full argv, program name included.
    ///
    /// An end-of-options marker is placed ahead of the user's words so clap
    /// keeps every one of them, a literal `--` included.
    pub fn parse_from<I, T>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_default();
        let argv = [program, OsString::from(END_OF_OPTIONS)].into_iter().chain(args);

        let cli = Cli::try_parse_from(argv).map_err(|_| ArgsError::WrongCount)?;
        Self::from_cli(cli)
    }
}

/// The usage line for `program`.
pub fn usage(program: &str) -> String {
    format!("Usage: {program} [{VERBOSE_FLAG}] <string-to-validate>")
}
