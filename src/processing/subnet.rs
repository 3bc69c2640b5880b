//! CIDR parsing and human readable ranges.

use crate::models::{Ipv4, Ipv6, Subnet};

/// Shown in place of the machine network when none is set.
pub const NO_SUBNET_SET: &str = "No subnet set";

/// Parse a CIDR literal, trying IPv4 first and then IPv6.
///
/// # Examples
/// ```
/// use wizard_status::processing::get_subnet;
/// assert!(get_subnet("fd00::/64").is_valid());
/// assert!(!get_subnet("not a subnet").is_valid());
/// ```
pub fn get_subnet(cidr: &str) -> Subnet {
    let literal = cidr.to_string();
    if let Ok(cidr) = Ipv4::new(cidr) {
        return Subnet::Ipv4 { literal, cidr };
    }
    match Ipv6::new(cidr) {
        Ok(cidr) => Subnet::Ipv6 { literal, cidr },
        Err(e) => {
            log::debug!("'{literal}' is not an IPv4 or IPv6 CIDR: {e}");
            Subnet::Invalid { literal }
        }
    }
}

/// Render a subnet as `"<literal> (<start> - <end>)"`, or `""` when invalid.
pub fn humanize_subnet(subnet: &Subnet) -> String {
    match (subnet.start(), subnet.end()) {
        (Some(start), Some(end)) => format!("{} ({start} - {end})", subnet.literal()),
        _ => String::new(),
    }
}

/// Humanized machine network, with a placeholder when it is not set.
pub fn subnet_from_machine_network_cidr(machine_network_cidr: Option<&str>) -> String {
    match machine_network_cidr {
        Some(cidr) if !cidr.is_empty() => humanize_subnet(&get_subnet(cidr)),
        _ => NO_SUBNET_SET.to_string(),
    }
}
