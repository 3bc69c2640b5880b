//! Everything a host status cell needs for one wizard step.

use super::{step_sublabel, StepStatusResolver};
use crate::models::{Host, HostStatus, ValidationsInfo, WizardStep};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HostStepSummary {
    pub host_id: String,
    pub step: WizardStep,
    pub status: HostStatus,
    /// Only the validations of this step.
    pub validations_info: ValidationsInfo,
    pub sublabel: Option<&'static str>,
}

/// Status, step validations and sublabel of `host` for `step`.
pub fn host_step_summary(
    resolver: &StepStatusResolver,
    host: &Host,
    step: WizardStep,
) -> HostStepSummary {
    let validations_info = resolver.step_validations_info(&host.validations_info(), step);
    HostStepSummary {
        host_id: host.id.clone(),
        step,
        status: resolver.step_status(step, host),
        sublabel: step_sublabel(resolver, &validations_info, step),
        validations_info,
    }
}
