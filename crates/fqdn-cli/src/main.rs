//! fqdn - check that a string is a valid FQDN or IP literal.
//!
//! Exit status 0 means valid, 1 means invalid or bad usage.

use std::process::ExitCode;

fn main() -> ExitCode {
    fqdn_cli::run()
}
