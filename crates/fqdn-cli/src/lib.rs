//! # fqdn-cli
//!
//! Command-line front end for [`fqdn_core`], meant for shell scripts and
//! input-sanitization pipelines:
//!
//! ```text
//! fqdn [-v] <string-to-validate>
//! ```
//!
//! The exit status is the answer. `-v` adds a human-readable diagnostic.

pub mod cli;
pub mod config;
pub mod output;

pub use cli::{run, run_with, Outcome};
