//! Wizard step to validation group table.

use crate::models::{Validation, ValidationSeverity, WizardStep};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

/// Validation groups and ids a single wizard step cares about.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StepValidations {
    /// Validation groups, in display order.
    pub groups: Vec<String>,
    /// If not empty, only these ids count within `groups`.
    pub validation_ids: Vec<String>,
    /// Ids treated as soft for this step when the result reports no severity.
    pub soft_validation_ids: Vec<String>,
}

impl StepValidations {
    pub fn new(groups: &[&str]) -> Self {
        StepValidations {
            groups: groups.iter().map(|g| g.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_soft_validation_ids(mut self, ids: &[&str]) -> Self {
        self.soft_validation_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_validation_ids(mut self, ids: &[&str]) -> Self {
        self.validation_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g == name)
    }

    /// Whether a result of one of `groups` is counted for this step.
    pub fn counts(&self, validation: &Validation) -> bool {
        self.validation_ids.is_empty() || self.validation_ids.contains(&validation.id)
    }

    /// A reported severity always wins over `soft_validation_ids`.
    pub fn is_soft(&self, validation: &Validation) -> bool {
        match validation.severity {
            Some(severity) => severity == ValidationSeverity::Soft,
            None => self.soft_validation_ids.contains(&validation.id),
        }
    }
}

/// Immutable table mapping each wizard step to its validations.
///
/// Steps missing from the table have no validations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct WizardStepsValidations {
    steps: BTreeMap<WizardStep, StepValidations>,
}

static NO_VALIDATIONS: StepValidations = StepValidations {
    groups: Vec::new(),
    validation_ids: Vec::new(),
    soft_validation_ids: Vec::new(),
};

impl WizardStepsValidations {
    pub fn new(steps: impl IntoIterator<Item = (WizardStep, StepValidations)>) -> Self {
        WizardStepsValidations {
            steps: steps.into_iter().collect(),
        }
    }

    pub fn step(&self, step: WizardStep) -> &StepValidations {
        self.steps.get(&step).unwrap_or(&NO_VALIDATIONS)
    }

    /// Load a table from a JSON file keyed by step name.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn Error>> {
        if !Path::new(path).exists() {
            return Err(format!("Steps config file does not exist: {path}").into());
        }
        log::info!("Reading wizard steps config: {path}");
        let json = std::fs::read_to_string(path)?;
        let mut deserializer = serde_json::Deserializer::from_str(&json);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            format!(
                "Error parsing steps config {path} at '{json_path}': {e}",
                json_path = e.path()
            )
            .into()
        })
    }
}

impl Default for WizardStepsValidations {
    fn default() -> Self {
        WizardStepsValidations::new([
            (WizardStep::ClusterDetails, StepValidations::default()),
            (
                WizardStep::HostDiscovery,
                StepValidations::new(&["hardware", "operators"])
                    .with_soft_validation_ids(&["sufficient-installation-disk-speed"]),
            ),
            (
                WizardStep::Networking,
                StepValidations::new(&["network"])
                    .with_soft_validation_ids(&["ntp-synced", "container-images-available"]),
            ),
            (
                WizardStep::Review,
                StepValidations::new(&["hardware", "network", "operators"])
                    .with_soft_validation_ids(&[
                        "sufficient-installation-disk-speed",
                        "ntp-synced",
                        "container-images-available",
                    ]),
            ),
        ])
    }
}
