//! Integration tests for wizard-status
//!
//! These tests run the derivation layer end to end on a snapshot fixture.

use wizard_status::{
    config::ResolverOptions,
    load_resolver,
    models::{HostStatus, WizardStep},
    processing::{
        get_bare_metal_discovery_initial_values, get_host_subnets, get_network_initial_values,
        get_subnet, host_step_summary, humanize_subnet, is_adv_conf, InventoryHostname,
        NO_SUBNET_SET, SOME_VALIDATIONS_FAILED,
    },
    snapshot::read_snapshot,
};

const SNAPSHOT: &str = "src/tests/test_data/cluster_snapshot_01.json";

#[test]
fn test_network_values_from_snapshot() {
    let snapshot = read_snapshot(SNAPSHOT).expect("Failed to read snapshot");
    let cluster = &snapshot.cluster;

    let subnets = get_host_subnets(cluster, &InventoryHostname);
    assert_eq!(subnets.len(), 2);
    // requested hostname, inventory hostname, then the id for a broken inventory
    assert_eq!(
        subnets[0].host_labels,
        vec!["master-0", "master-1", "a1f3c2d4-0003"]
    );
    assert_eq!(
        subnets[0].humanized,
        "192.168.122.0/24 (192.168.122.0 - 192.168.122.255)"
    );
    assert_eq!(
        subnets[1].humanized,
        "fd2e:6f44:5dd8:c956::/120 (fd2e:6f44:5dd8:c956:: - fd2e:6f44:5dd8:c956::ff)"
    );

    let values = get_network_initial_values(cluster, &snapshot.defaults);
    assert_eq!(values.cluster_network_cidr.as_deref(), Some("10.128.0.0/14"));
    assert_eq!(values.service_network_cidr.as_deref(), Some("172.31.0.0/16"));
    assert_eq!(values.ingress_vip, "");
    assert!(values.share_discovery_ssh_key);
    assert_eq!(values.vip_dhcp_allocation, Some(false));

    // service network differs from the platform default
    assert!(is_adv_conf(cluster, &snapshot.defaults));
    assert!(get_bare_metal_discovery_initial_values(cluster).use_extra_disks_for_local_storage);
}

#[test]
fn test_step_statuses_from_snapshot() {
    let snapshot = read_snapshot(SNAPSHOT).expect("Failed to read snapshot");
    let resolver =
        load_resolver(None, ResolverOptions::default()).expect("Failed to load resolver");
    let hosts = &snapshot.cluster.hosts;

    // soft disk speed failure only
    let discovery = host_step_summary(&resolver, &hosts[0], WizardStep::HostDiscovery);
    assert_eq!(discovery.status, HostStatus::Known);
    assert_eq!(discovery.sublabel, Some(SOME_VALIDATIONS_FAILED));
    let networking = host_step_summary(&resolver, &hosts[0], WizardStep::Networking);
    assert_eq!(networking.status, HostStatus::Known);
    assert_eq!(networking.sublabel, None);

    // blocking cpu failure, soft ntp failure
    let discovery = host_step_summary(&resolver, &hosts[1], WizardStep::HostDiscovery);
    assert_eq!(discovery.status, HostStatus::Insufficient);
    let networking = host_step_summary(&resolver, &hosts[1], WizardStep::Networking);
    assert_eq!(networking.status, HostStatus::Known);
    assert_eq!(networking.sublabel, Some(SOME_VALIDATIONS_FAILED));
    assert_eq!(
        resolver.failing_soft_validation_ids(&networking.validations_info, WizardStep::Networking),
        vec!["ntp-synced"]
    );

    // host in error dominates every step
    for step in WizardStep::ALL {
        assert_eq!(resolver.step_status(step, &hosts[2]), HostStatus::Error);
    }
}

#[test]
fn test_custom_steps_table() {
    let snapshot = read_snapshot(SNAPSHOT).expect("Failed to read snapshot");
    let resolver = load_resolver(
        Some("src/tests/test_data/wizard_steps_01.json"),
        ResolverOptions::default(),
    )
    .expect("Failed to load resolver");

    // the disk speed validation is not listed for host discovery in this table
    let host = &snapshot.cluster.hosts[0];
    let discovery = host_step_summary(&resolver, host, WizardStep::HostDiscovery);
    assert_eq!(discovery.status, HostStatus::Known);
    assert_eq!(discovery.sublabel, None);
    assert_eq!(discovery.validations_info.validations().count(), 2);
}

#[test]
fn test_subnet_properties() {
    for literal in ["0.0.0.0/0", "10.0.0.1", "172.16.5.4/12", "::/0", "fe80::1/64", "2001:db8::1"] {
        let subnet = get_subnet(literal);
        assert!(subnet.is_valid(), "{literal} should parse");
        let humanized = humanize_subnet(&subnet);
        let start = subnet.start().unwrap();
        let end = subnet.end().unwrap();
        assert_eq!(humanized, format!("{literal} ({start} - {end})"));
    }
    for literal in ["", "10.0.0.0/-1", "10.0.0.256/24", "fe80::1/200", "cidr"] {
        assert_eq!(humanize_subnet(&get_subnet(literal)), "");
    }
    assert_eq!(
        wizard_status::processing::subnet_from_machine_network_cidr(None),
        NO_SUBNET_SET
    );
}
