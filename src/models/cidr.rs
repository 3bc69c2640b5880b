//! Splitting of `address/prefix` literals shared by both address families.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^(?P<addr>[^/\s]+)(?:/(?P<len>\d{1,3}))?$").expect("Invalid Regex?");
}

/// Split a CIDR literal into its address part and optional prefix length.
///
/// Only the shape is checked here, the address family parsers validate the parts.
pub fn split_cidr(cidr: &str) -> Result<(&str, Option<&str>), Box<dyn Error>> {
    let caps = CIDR_RE
        .captures(cidr)
        .ok_or_else(|| format!("Invalid address/mask: '{cidr}'"))?;
    let addr = caps
        .name("addr")
        .map(|m| m.as_str())
        .ok_or_else(|| format!("Missing address in '{cidr}'"))?;
    Ok((addr, caps.name("len").map(|m| m.as_str())))
}
