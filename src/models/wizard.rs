//! Wizard step identifiers.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A step of the cluster installation wizard.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    ClusterDetails,
    HostDiscovery,
    Networking,
    Review,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 4] = [
        WizardStep::ClusterDetails,
        WizardStep::HostDiscovery,
        WizardStep::Networking,
        WizardStep::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::ClusterDetails => "cluster-details",
            WizardStep::HostDiscovery => "host-discovery",
            WizardStep::Networking => "networking",
            WizardStep::Review => "review",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WizardStep {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WizardStep::ALL
            .iter()
            .find(|step| step.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown wizard step '{s}'").into())
    }
}
