//! Cluster data model as returned by the installer API.

use super::Host;
use serde::{Deserialize, Serialize};

/// Name of the storage operator that enables extra disks for local storage.
pub const STORAGE_OPERATOR_NAME: &str = "ocs";

/// A cluster being installed, with its hosts and network settings.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Cluster {
    pub id: String,
    pub hosts: Vec<Host>,
    /// Subnets observed on the hosts, with the hosts seen on each.
    pub host_networks: Vec<HostNetwork>,
    pub cluster_network_cidr: Option<String>,
    pub cluster_network_host_prefix: Option<u8>,
    pub service_network_cidr: Option<String>,
    pub machine_network_cidr: Option<String>,
    pub api_vip: Option<String>,
    pub ingress_vip: Option<String>,
    pub ssh_public_key: Option<String>,
    pub vip_dhcp_allocation: Option<bool>,
    pub image_info: ImageInfo,
    pub monitored_operators: Vec<MonitoredOperator>,
}

/// A subnet and the ids of the hosts that reported an address on it.
///
/// `cidr` comes straight from the hosts and may be malformed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HostNetwork {
    pub cidr: Option<String>,
    pub host_ids: Vec<String>,
}

/// Discovery image settings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ImageInfo {
    /// Key baked into the discovery image.
    pub ssh_public_key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MonitoredOperator {
    pub name: String,
}

/// Platform defaults for the cluster networks. Used as a comparison baseline only.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClusterDefaultConfig {
    pub cluster_network_cidr: Option<String>,
    pub cluster_network_host_prefix: Option<u8>,
    pub service_network_cidr: Option<String>,
}

impl Cluster {
    pub fn has_monitored_operator(&self, name: &str) -> bool {
        self.monitored_operators.iter().any(|op| op.name == name)
    }
}
