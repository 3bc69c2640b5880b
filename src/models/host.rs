//! Host data model and lenient decoding of its serialized blobs.

use super::ValidationsInfo;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host lifecycle status as reported by the installer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HostStatus {
    #[default]
    Discovering,
    Known,
    Insufficient,
    Disconnected,
    PendingForInput,
    Disabled,
    PreparingForInstallation,
    Installing,
    InstallingInProgress,
    InstallingPendingUserAction,
    Installed,
    Error,
    Cancelled,
    Resetting,
    AddedToExistingCluster,
    #[serde(other)]
    Unknown,
}

impl HostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostStatus::Discovering => "discovering",
            HostStatus::Known => "known",
            HostStatus::Insufficient => "insufficient",
            HostStatus::Disconnected => "disconnected",
            HostStatus::PendingForInput => "pending-for-input",
            HostStatus::Disabled => "disabled",
            HostStatus::PreparingForInstallation => "preparing-for-installation",
            HostStatus::Installing => "installing",
            HostStatus::InstallingInProgress => "installing-in-progress",
            HostStatus::InstallingPendingUserAction => "installing-pending-user-action",
            HostStatus::Installed => "installed",
            HostStatus::Error => "error",
            HostStatus::Cancelled => "cancelled",
            HostStatus::Resetting => "resetting",
            HostStatus::AddedToExistingCluster => "added-to-existing-cluster",
            HostStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A host registered to a cluster.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Host {
    pub id: String,
    pub status: HostStatus,
    /// Hostname set by the user, overrides the discovered one.
    pub requested_hostname: Option<String>,
    /// Serialized [`Inventory`].
    pub inventory: Option<String>,
    /// Serialized [`ValidationsInfo`].
    pub validations_info: Option<String>,
}

impl Host {
    /// Decode the inventory blob. Missing or malformed blobs give an empty inventory.
    pub fn inventory(&self) -> Inventory {
        decode_blob(self.inventory.as_deref(), &self.id, "inventory").unwrap_or_default()
    }

    /// Decode the validations blob. Missing or malformed blobs give no validations.
    pub fn validations_info(&self) -> ValidationsInfo {
        decode_blob(self.validations_info.as_deref(), &self.id, "validations_info")
            .unwrap_or_default()
    }
}

/// Hardware inventory reported by the discovery agent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Inventory {
    pub hostname: Option<String>,
    pub bmc_address: Option<String>,
    pub system_vendor: Option<SystemVendor>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SystemVendor {
    pub manufacturer: Option<String>,
    pub product_name: Option<String>,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
}

/// Decode a JSON string field, logging instead of failing.
fn decode_blob<T: DeserializeOwned>(blob: Option<&str>, host_id: &str, field: &str) -> Option<T> {
    let blob = blob.filter(|b| !b.trim().is_empty())?;
    let mut deserializer = serde_json::Deserializer::from_str(blob);
    match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!(
                "Host {host_id}: cannot decode {field} at '{path}': {e}",
                path = e.path()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_status_serde() {
        let status: HostStatus = serde_json::from_str("\"pending-for-input\"").unwrap();
        assert_eq!(status, HostStatus::PendingForInput);
        let status: HostStatus = serde_json::from_str("\"something-new\"").unwrap();
        assert_eq!(status, HostStatus::Unknown);
        assert_eq!(
            serde_json::to_string(&HostStatus::AddedToExistingCluster).unwrap(),
            "\"added-to-existing-cluster\""
        );
        assert_eq!(HostStatus::InstallingInProgress.to_string(), "installing-in-progress");
    }

    #[test]
    fn test_inventory_decode() {
        let host = Host {
            id: "h1".to_string(),
            inventory: Some(
                r#"{
                    "hostname": "master-0",
                    "system_vendor": {"manufacturer": "Red Hat", "virtual": true}
                }"#
                .to_string(),
            ),
            ..Default::default()
        };
        let inventory = host.inventory();
        assert_eq!(inventory.hostname.as_deref(), Some("master-0"));
        assert!(inventory.system_vendor.unwrap().is_virtual);
    }

    #[test]
    fn test_inventory_decode_failure_is_empty() {
        let mut host = Host {
            id: "h1".to_string(),
            inventory: Some("{not json".to_string()),
            ..Default::default()
        };
        assert_eq!(host.inventory(), Inventory::default());

        host.inventory = Some(r#"{"hostname": 42}"#.to_string());
        assert_eq!(host.inventory(), Inventory::default());

        host.inventory = None;
        assert_eq!(host.inventory(), Inventory::default());
    }

    #[test]
    fn test_validations_decode_failure_is_empty() {
        let host = Host {
            id: "h1".to_string(),
            validations_info: Some("[]".to_string()),
            ..Default::default()
        };
        assert!(host.validations_info().is_empty());
    }
}
