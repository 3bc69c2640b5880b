//! Parsed subnet descriptor.

use super::{Ipv4, Ipv6};
use std::net::IpAddr;

/// A CIDR literal after parsing, tagged by address family.
///
/// Parsing never fails: a literal that is neither IPv4 nor IPv6 is kept as
/// [`Subnet::Invalid`] so callers have to handle it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subnet {
    Ipv4 { literal: String, cidr: Ipv4 },
    Ipv6 { literal: String, cidr: Ipv6 },
    Invalid { literal: String },
}

impl Subnet {
    /// The literal the subnet was parsed from, unchanged.
    pub fn literal(&self) -> &str {
        match self {
            Subnet::Ipv4 { literal, .. }
            | Subnet::Ipv6 { literal, .. }
            | Subnet::Invalid { literal } => literal,
        }
    }

    /// First address in the range.
    pub fn start(&self) -> Option<IpAddr> {
        match self {
            Subnet::Ipv4 { cidr, .. } => Some(IpAddr::V4(cidr.lo())),
            Subnet::Ipv6 { cidr, .. } => Some(IpAddr::V6(cidr.lo())),
            Subnet::Invalid { .. } => None,
        }
    }

    /// Last address in the range.
    pub fn end(&self) -> Option<IpAddr> {
        match self {
            Subnet::Ipv4 { cidr, .. } => Some(IpAddr::V4(cidr.hi())),
            Subnet::Ipv6 { cidr, .. } => Some(IpAddr::V6(cidr.hi())),
            Subnet::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Subnet::Invalid { .. })
    }
}
