//! Syntax checks for host identifiers.
//!
//! Decides whether a string is usable as a host identifier: either an IPv4 or
//! IPv6 literal, or a fully-qualified domain name that follows the label and
//! length rules in [`verify_fqdn`].
//!
//! - **IP literals**: [`parse_ip_literal`], purely textual, never resolves
//! - **FQDNs**: [`verify_fqdn`] and the validated [`Fqdn`] type
//! - **Labels**: borrowed [`Label`] views produced by [`labels`]
//! - **Errors**: one [`FqdnError`] per rejected input, first violation wins
//!
//! # Example
//!
//! ```rust
//! use fqdn_core::{classify_host, FqdnError, HostKind};
//!
//! assert_eq!(classify_host("example.com"), Ok(HostKind::Fqdn));
//! assert_eq!(classify_host("192.168.1.1"), Ok(HostKind::Ipv4));
//! assert_eq!(classify_host("example.com1"), Err(FqdnError::InvalidCharacters));
//! ```

mod error;
mod host;
pub mod ip;
pub mod label;
mod validator;

pub use error::{FqdnError, Result};
pub use host::{classify_host, is_valid_host, HostKind};
pub use ip::{parse_ip_literal, IpLiteral};
pub use label::{labels, Label, Labels, MAX_LABEL_LENGTH, MAX_NAME_LENGTH};
pub use validator::{verify_fqdn, Fqdn};
