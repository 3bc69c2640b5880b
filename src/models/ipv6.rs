//! IPv6 counterpart of [`super::Ipv4`].

use super::cidr::split_cidr;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv6Addr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Convert a prefix length to a 128 bit network mask.
pub fn get_cidr_mask_v6(len: u8) -> Result<u128, Box<dyn Error>> {
    if len > MAX_LENGTH_V6 {
        Err("Network length is too long".into())
    } else if len == 0 {
        // u128 shifts by the full width overflow
        Ok(0)
    } else {
        Ok(u128::MAX << (MAX_LENGTH_V6 - len))
    }
}

/// IPv6 address with prefix length.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6 {
    pub addr: Ipv6Addr,
    /// Prefix length (0-128).
    pub mask: u8,
}

impl Serialize for Ipv6 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv6 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv6::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl Ipv6 {
    /// Create a new [`Ipv6`] from a CIDR string (e.g., "fd01::/48").
    pub fn new(addr_cidr: &str) -> Result<Ipv6, Box<dyn Error>> {
        let (addr, mask) = split_cidr(addr_cidr)?;
        let addr: Ipv6Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        let mask = match mask {
            Some(m) => m.parse::<u8>()?,
            None => MAX_LENGTH_V6,
        };
        if mask > MAX_LENGTH_V6 {
            return Err("Network length is too long".into());
        }
        Ok(Ipv6 { addr, mask })
    }

    fn network_mask(&self) -> u128 {
        get_cidr_mask_v6(self.mask).unwrap_or(u128::MAX)
    }

    /// First address of the range.
    pub fn lo(&self) -> Ipv6Addr {
        Ipv6Addr::from(u128::from(self.addr) & self.network_mask())
    }

    /// Last address of the range.
    pub fn hi(&self) -> Ipv6Addr {
        let mask = self.network_mask();
        Ipv6Addr::from((u128::from(self.addr) & mask) | !mask)
    }
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
