//! Network facing values derived from a cluster snapshot.
//!
//! - [`get_host_subnets`] - subnets observed on hosts, with host labels
//! - [`get_network_initial_values`] - initial values of the networking form
//! - [`is_adv_conf`] - whether the cluster departs from the platform defaults
//! - [`get_bare_metal_discovery_initial_values`] - initial values of the discovery form

use super::hostname::{host_label, HostnameResolver};
use super::subnet::{get_subnet, humanize_subnet, subnet_from_machine_network_cidr};
use crate::models::{Cluster, ClusterDefaultConfig, STORAGE_OPERATOR_NAME};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A subnet seen on the hosts and the hosts seen on it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HostSubnet {
    /// CIDR literal as reported, empty if none was.
    pub subnet: String,
    /// Hostnames, or ids when no hostname is known.
    pub host_labels: Vec<String>,
    /// Humanized range, empty for a malformed CIDR.
    pub humanized: String,
}

/// Initial values of the networking form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NetworkConfigurationValues {
    pub cluster_network_cidr: Option<String>,
    pub cluster_network_host_prefix: Option<u8>,
    pub service_network_cidr: Option<String>,
    pub api_vip: String,
    pub ingress_vip: String,
    pub ssh_public_key: String,
    pub host_subnet: String,
    pub share_discovery_ssh_key: bool,
    pub vip_dhcp_allocation: Option<bool>,
}

impl NetworkConfigurationValues {
    /// Write the form values back onto a cluster, as saving the form would.
    pub fn apply_to(&self, cluster: &Cluster) -> Cluster {
        Cluster {
            cluster_network_cidr: self.cluster_network_cidr.clone(),
            cluster_network_host_prefix: self.cluster_network_host_prefix,
            service_network_cidr: self.service_network_cidr.clone(),
            api_vip: Some(self.api_vip.clone()),
            ingress_vip: Some(self.ingress_vip.clone()),
            ssh_public_key: Some(self.ssh_public_key.clone()),
            vip_dhcp_allocation: self.vip_dhcp_allocation,
            ..cluster.clone()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct BareMetalDiscoveryValues {
    pub use_extra_disks_for_local_storage: bool,
}

/// Build the subnet to hosts table, in the order the cluster reports host networks.
pub fn get_host_subnets(cluster: &Cluster, resolver: &dyn HostnameResolver) -> Vec<HostSubnet> {
    let labels: HashMap<&str, String> = cluster
        .hosts
        .iter()
        .map(|host| (host.id.as_str(), host_label(resolver, host)))
        .collect();

    cluster
        .host_networks
        .iter()
        .map(|hn| {
            let subnet = hn.cidr.clone().unwrap_or_default();
            let humanized = humanize_subnet(&get_subnet(&subnet));
            if humanized.is_empty() {
                log::warn!("Cluster {}: cannot read host network '{subnet}'", cluster.id);
            }
            HostSubnet {
                host_labels: hn
                    .host_ids
                    .iter()
                    .map(|id| labels.get(id.as_str()).cloned().unwrap_or_else(|| id.clone()))
                    .collect(),
                humanized,
                subnet,
            }
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Current cluster values, with the platform defaults for unset networks.
pub fn get_network_initial_values(
    cluster: &Cluster,
    defaults: &ClusterDefaultConfig,
) -> NetworkConfigurationValues {
    let image_key = non_empty(cluster.image_info.ssh_public_key.as_deref());

    NetworkConfigurationValues {
        cluster_network_cidr: non_empty(cluster.cluster_network_cidr.as_deref())
            .or(defaults.cluster_network_cidr.as_deref())
            .map(str::to_string),
        cluster_network_host_prefix: cluster
            .cluster_network_host_prefix
            .filter(|prefix| *prefix != 0)
            .or(defaults.cluster_network_host_prefix),
        service_network_cidr: non_empty(cluster.service_network_cidr.as_deref())
            .or(defaults.service_network_cidr.as_deref())
            .map(str::to_string),
        api_vip: cluster.api_vip.clone().unwrap_or_default(),
        ingress_vip: cluster.ingress_vip.clone().unwrap_or_default(),
        ssh_public_key: cluster.ssh_public_key.clone().unwrap_or_default(),
        host_subnet: subnet_from_machine_network_cidr(cluster.machine_network_cidr.as_deref()),
        share_discovery_ssh_key: image_key.is_some()
            && cluster.ssh_public_key.as_deref() == image_key,
        vip_dhcp_allocation: cluster.vip_dhcp_allocation,
    }
}

/// True when any cluster network setting differs from the platform default.
pub fn is_adv_conf(cluster: &Cluster, defaults: &ClusterDefaultConfig) -> bool {
    cluster.cluster_network_cidr != defaults.cluster_network_cidr
        || cluster.cluster_network_host_prefix != defaults.cluster_network_host_prefix
        || cluster.service_network_cidr != defaults.service_network_cidr
}

pub fn get_bare_metal_discovery_initial_values(cluster: &Cluster) -> BareMetalDiscoveryValues {
    BareMetalDiscoveryValues {
        use_extra_disks_for_local_storage: cluster.has_monitored_operator(STORAGE_OPERATOR_NAME),
    }
}
