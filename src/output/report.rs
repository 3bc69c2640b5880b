//! Printing of the derived network values and step statuses.

use super::terminal::{colored_status, format_field};
use crate::models::{Cluster, HostStatus, WizardStep};
use crate::processing::{
    host_label, host_step_summary, HostStepSummary, HostSubnet, HostnameResolver,
    NetworkConfigurationValues, StepStatusResolver,
};
use colored::Colorize;

/// One CSV-ish row of the subnet table.
pub fn format_host_subnet_row(row: &HostSubnet) -> String {
    format!(
        "{subnet},{humanized},{hosts}",
        subnet = format_field(&row.subnet, 28),
        humanized = format_field(&row.humanized, 60),
        hosts = format_field(row.host_labels.join(" "), 20),
    )
}

pub fn print_host_subnets(rows: &[HostSubnet]) {
    log::info!("# Host subnets: {}", rows.len());
    println!(concat!(
        r#"                    "subnet","#,
        r#"                                                "range","#,
        r#"             "hosts""#
    ));
    for row in rows {
        println!("{}", format_host_subnet_row(row));
    }
}

pub fn print_network_values(values: &NetworkConfigurationValues, advanced: bool) {
    let unset = || "-".to_string();
    println!(
        "{} ({})",
        "Networking".bold(),
        if advanced { "advanced" } else { "basic" }
    );
    println!(
        "  cluster network:     {}",
        values.cluster_network_cidr.clone().unwrap_or_else(unset)
    );
    println!(
        "  host prefix:         {}",
        values
            .cluster_network_host_prefix
            .map(|p| p.to_string())
            .unwrap_or_else(unset)
    );
    println!(
        "  service network:     {}",
        values.service_network_cidr.clone().unwrap_or_else(unset)
    );
    println!("  machine network:     {}", values.host_subnet);
    println!("  api vip:             {}", values.api_vip);
    println!("  ingress vip:         {}", values.ingress_vip);
    println!(
        "  vip dhcp allocation: {}",
        values
            .vip_dhcp_allocation
            .map(|b| b.to_string())
            .unwrap_or_else(unset)
    );
    println!(
        "  ssh key:             {}",
        if values.share_discovery_ssh_key {
            "shared with discovery image"
        } else if values.ssh_public_key.is_empty() {
            "none"
        } else {
            "custom"
        }
    );
}

/// One row of the step status table, without colors.
pub fn format_step_row(label: &str, summaries: &[HostStepSummary]) -> String {
    let cells: Vec<String> = summaries
        .iter()
        .map(step_cell)
        .collect();
    format!("{},{}", format_field(label, 20), cells.join(","))
}

fn step_cell(summary: &HostStepSummary) -> String {
    let status = summary.status;
    match summary.sublabel {
        Some(sublabel) => format!("{}: {status} ({sublabel})", summary.step),
        None => format!("{}: {status}", summary.step),
    }
}

pub fn print_step_statuses(
    cluster: &Cluster,
    resolver: &StepStatusResolver,
    hostnames: &dyn HostnameResolver,
) {
    log::info!("# Step statuses for {} hosts", cluster.hosts.len());
    for host in &cluster.hosts {
        let summaries: Vec<HostStepSummary> = WizardStep::ALL
            .iter()
            .map(|step| host_step_summary(resolver, host, *step))
            .collect();
        println!(
            "{} [{}]",
            format_step_row(&host_label(hostnames, host), &summaries),
            colored_status(host.status)
        );
        if summaries.iter().any(|s| s.status == HostStatus::Insufficient) {
            log::warn!("Host {} is blocking the wizard", host.id);
        }
    }
}
