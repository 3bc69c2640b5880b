//! Reading of cluster snapshot files.

use crate::models::{Cluster, ClusterDefaultConfig};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// A cluster as returned by the API together with the platform defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Snapshot {
    pub cluster: Cluster,
    #[serde(default)]
    pub defaults: ClusterDefaultConfig,
}

/// Read a snapshot file.
///
/// # Returns
/// * `Ok(Snapshot)` - The parsed snapshot
/// * `Err` - If the file does not exist or is not a valid snapshot
pub fn read_snapshot(snapshot_file: &str) -> Result<Snapshot, Box<dyn Error>> {
    if !Path::new(snapshot_file).exists() {
        return Err(format!("Snapshot file does not exist: {snapshot_file}").into());
    }
    log::info!("Reading snapshot file: {snapshot_file}");
    let json = std::fs::read_to_string(snapshot_file)
        .map_err(|e| format!("Error reading snapshot file {snapshot_file}: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let snapshot: Snapshot = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        format!(
            "Error parsing snapshot {snapshot_file} at '{path}': {e}",
            path = e.path()
        )
    })?;

    log::info!(
        "Snapshot cluster '{}': {} hosts, {} host networks",
        snapshot.cluster.id,
        snapshot.cluster.hosts.len(),
        snapshot.cluster.host_networks.len()
    );
    Ok(snapshot)
}
