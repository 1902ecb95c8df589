//! Combined host identifier check: IP literal first, FQDN rules second.

use serde::Serialize;
use std::fmt;
use tracing::trace;

use crate::error::Result;
use crate::ip::{parse_ip_literal, IpLiteral};
use crate::validator::verify_fqdn;

/// What kind of host identifier a string turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    Ipv4,
    Ipv6,
    Fqdn,
}

impl From<IpLiteral> for HostKind {
    fn from(ip: IpLiteral) -> Self {
        match ip {
            IpLiteral::V4(_) => Self::Ipv4,
            IpLiteral::V6(_) => Self::Ipv6,
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4 => write!(f, "IPv4 address"),
            Self::Ipv6 => write!(f, "IPv6 address"),
            Self::Fqdn => write!(f, "FQDN"),
        }
    }
}

/// Classify `input` as a usable host identifier.
///
/// IP literals short-circuit the FQDN scan, so `192.168.1.1` is accepted even
/// though its final label is numeric. The error is always from the FQDN
/// rules, since a failed address parse carries no detail.
pub fn classify_host(input: &str) -> Result<HostKind> {
    if let Some(ip) = parse_ip_literal(input) {
        trace!(family = ip.family(), "input is an IP literal");
        return Ok(ip.into());
    }

    verify_fqdn(input)?;
    trace!("input is a syntactically valid FQDN");
    Ok(HostKind::Fqdn)
}

/// Boolean form of [`classify_host`].
pub fn is_valid_host(input: &str) -> bool {
    classify_host(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FqdnError;

    #[test]
    fn ip_literals_take_precedence() {
        assert_eq!(classify_host("192.168.1.1"), Ok(HostKind::Ipv4));
        assert_eq!(classify_host("::1"), Ok(HostKind::Ipv6));
        assert_eq!(classify_host("2001:db8::8a2e:370:7334"), Ok(HostKind::Ipv6));
    }

    #[test]
    fn falls_back_to_fqdn_rules() {
        assert_eq!(classify_host("example.com"), Ok(HostKind::Fqdn));
        assert_eq!(classify_host("example.com1"), Err(FqdnError::InvalidCharacters));
        assert_eq!(classify_host("-example.com"), Err(FqdnError::InvalidLabelStart));
    }

    #[test]
    fn malformed_addresses_are_scanned_as_names() {
        // numeric final label
        assert_eq!(classify_host("256.1.1.1"), Err(FqdnError::InvalidCharacters));
        assert_eq!(classify_host("1.2.3"), Err(FqdnError::InvalidCharacters));
        assert_eq!(classify_host("::1::"), Err(FqdnError::InvalidLabelStart));
    }

    #[test]
    fn boolean_helper() {
        assert!(is_valid_host("10.0.0.1"));
        assert!(is_valid_host("sub.example.org"));
        assert!(!is_valid_host("sub..example.org"));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&HostKind::Ipv6).unwrap(), r#""ipv6""#);
        assert_eq!(HostKind::Fqdn.to_string(), "FQDN");
    }
}
