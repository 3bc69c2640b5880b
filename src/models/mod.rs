//! Domain models for the cluster installation wizard.
//!
//! This module contains the data structures the derivation layer reads and produces:
//! - [`Ipv4`], [`Ipv6`] - addresses with CIDR notation support
//! - [`Subnet`] - parsed CIDR literal, tagged by family
//! - [`Cluster`], [`Host`] and friends - the API snapshot
//! - [`ValidationsInfo`] - per-host validation results
//! - [`WizardStep`] - wizard step identifiers

mod cidr;
mod cluster;
mod host;
mod ipv4;
mod ipv6;
mod subnet;
mod validations;
mod wizard;

// Re-export public types
pub use cluster::{
    Cluster, ClusterDefaultConfig, HostNetwork, ImageInfo, MonitoredOperator,
    STORAGE_OPERATOR_NAME,
};
pub use host::{Host, HostStatus, Inventory, SystemVendor};
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use ipv6::{get_cidr_mask_v6, Ipv6, MAX_LENGTH_V6};
pub use subnet::Subnet;
pub use validations::{
    Validation, ValidationGroup, ValidationSeverity, ValidationStatus, ValidationsInfo,
};
pub use wizard::WizardStep;
