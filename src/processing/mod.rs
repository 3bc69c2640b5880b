//! Derivation of UI facing values from a cluster snapshot.
//!
//! Every function here is a pure function of its inputs:
//! - [`subnet`] - CIDR parsing and humanized ranges
//! - [`network`] - subnet to host table and networking form values
//! - [`step_status`] - wizard step status per host
//! - [`sublabel`] - hint for failing soft validations

mod hostname;
mod network;
mod step_status;
mod subnet;
mod sublabel;
mod summary;

// Re-export public functions
pub use hostname::{host_label, HostnameResolver, InventoryHostname};
pub use network::{
    get_bare_metal_discovery_initial_values, get_host_subnets, get_network_initial_values,
    is_adv_conf, BareMetalDiscoveryValues, HostSubnet, NetworkConfigurationValues,
};
pub use step_status::{
    StepStatusResolver, ValidationsOutcome, STEP_STATUS_FAILING, STEP_STATUS_PENDING,
    STEP_STATUS_READY,
};
pub use subnet::{get_subnet, humanize_subnet, subnet_from_machine_network_cidr, NO_SUBNET_SET};
pub use sublabel::{step_sublabel, SOME_VALIDATIONS_FAILED};
pub use summary::{host_step_summary, HostStepSummary};
