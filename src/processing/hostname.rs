//! Host display names.

use crate::models::{Host, Inventory};

/// Derives the hostname shown for a host.
///
/// An empty result means no hostname is known and callers fall back to the host id.
pub trait HostnameResolver {
    fn hostname(&self, host: &Host, inventory: &Inventory) -> String;
}

impl<F> HostnameResolver for F
where
    F: Fn(&Host, &Inventory) -> String,
{
    fn hostname(&self, host: &Host, inventory: &Inventory) -> String {
        self(host, inventory)
    }
}

/// Requested hostname if the user set one, else the discovered one.
#[derive(Debug, Default, Clone, Copy)]
pub struct InventoryHostname;

impl HostnameResolver for InventoryHostname {
    fn hostname(&self, host: &Host, inventory: &Inventory) -> String {
        host.requested_hostname
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(inventory.hostname.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Hostname for display, falling back to the host id.
pub fn host_label(resolver: &dyn HostnameResolver, host: &Host) -> String {
    let hostname = resolver.hostname(host, &host.inventory());
    if hostname.is_empty() {
        host.id.clone()
    } else {
        hostname
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(id: &str, requested: Option<&str>, inventory: Option<&str>) -> Host {
        Host {
            id: id.to_string(),
            requested_hostname: requested.map(str::to_string),
            inventory: inventory.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_requested_hostname_wins() {
        let h = host("h1", Some("control-0"), Some(r#"{"hostname": "localhost"}"#));
        assert_eq!(host_label(&InventoryHostname, &h), "control-0");
    }

    #[test]
    fn test_inventory_hostname() {
        let h = host("h1", Some(""), Some(r#"{"hostname": "worker-1"}"#));
        assert_eq!(host_label(&InventoryHostname, &h), "worker-1");
    }

    #[test]
    fn test_falls_back_to_id() {
        let h = host("h1", None, Some("{broken"));
        assert_eq!(host_label(&InventoryHostname, &h), "h1");
    }

    #[test]
    fn test_closure_resolver() {
        let upper = |host: &Host, _: &Inventory| host.id.to_uppercase();
        assert_eq!(host_label(&upper, &host("abc", None, None)), "ABC");
    }
}
