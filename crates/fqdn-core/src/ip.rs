//! IP literal recognition.
//!
//! Textual parsing only: nothing here touches the network. The whole input
//! must be exactly one address, so prefixes, trailing garbage, zone ids and
//! out-of-range octets are all rejected.

use serde::Serialize;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A string that parsed as an IPv4 or IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "family", content = "address", rename_all = "lowercase")]
pub enum IpLiteral {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl IpLiteral {
    /// Address family name, `"ipv4"` or `"ipv6"`.
    #[must_use]
    pub const fn family(&self) -> &'static str {
        match self {
            Self::V4(_) => "ipv4",
            Self::V6(_) => "ipv6",
        }
    }
}

/// Dotted-quad IPv4 literal.
#[must_use]
pub fn is_ipv4_literal(input: &str) -> bool {
    input.parse::<Ipv4Addr>().is_ok()
}

/// Colon-hex IPv6 literal, `::` abbreviation and embedded IPv4 included.
#[must_use]
pub fn is_ipv6_literal(input: &str) -> bool {
    input.parse::<Ipv6Addr>().is_ok()
}

/// Try IPv4 first, then IPv6.
#[must_use]
pub fn parse_ip_literal(input: &str) -> Option<IpLiteral> {
    if let Ok(addr) = input.parse::<Ipv4Addr>() {
        return Some(IpLiteral::V4(addr));
    }
    input.parse::<Ipv6Addr>().ok().map(IpLiteral::V6)
}
