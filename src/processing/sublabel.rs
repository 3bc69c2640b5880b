//! One line hint shown under a step status.

use super::StepStatusResolver;
use crate::models::{ValidationsInfo, WizardStep};

/// Hint shown when soft validations of a step fail.
pub const SOME_VALIDATIONS_FAILED: &str = "Some validations failed";

/// Sublabel for `step`, present only when a soft validation fails.
pub fn step_sublabel(
    resolver: &StepStatusResolver,
    validations_info: &ValidationsInfo,
    step: WizardStep,
) -> Option<&'static str> {
    if resolver
        .failing_soft_validation_ids(validations_info, step)
        .is_empty()
    {
        None
    } else {
        Some(SOME_VALIDATIONS_FAILED)
    }
}
