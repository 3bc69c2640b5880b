//! Rolls per-host validation results up into a status per wizard step.

use crate::config::{ResolverOptions, StatusPrecedence, StepValidations, WizardStepsValidations};
use crate::models::{
    Host, HostStatus, ValidationGroup, ValidationStatus, ValidationsInfo, WizardStep,
};
use itertools::Itertools;

/// Step status when a blocking validation fails.
pub const STEP_STATUS_FAILING: HostStatus = HostStatus::Insufficient;
/// Step status while a validation has not been evaluated yet.
pub const STEP_STATUS_PENDING: HostStatus = HostStatus::PendingForInput;
/// Step status when nothing blocks the step.
pub const STEP_STATUS_READY: HostStatus = HostStatus::Known;

/// Aggregate of the step relevant validations, highest severity first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationsOutcome {
    BlockingFailure,
    Pending,
    SoftFailure,
    Success,
}

/// Resolves wizard step statuses against an immutable step table.
#[derive(Debug, Clone, Default)]
pub struct StepStatusResolver {
    table: WizardStepsValidations,
    options: ResolverOptions,
}

impl StepStatusResolver {
    pub fn new(table: WizardStepsValidations) -> Self {
        StepStatusResolver {
            table,
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn table(&self) -> &WizardStepsValidations {
        &self.table
    }

    /// Keep only the groups (and ids) configured for `step`, in their original order.
    pub fn step_validations_info(
        &self,
        validations_info: &ValidationsInfo,
        step: WizardStep,
    ) -> ValidationsInfo {
        let config = self.table.step(step);
        validations_info
            .groups()
            .filter(|group| config.has_group(&group.name))
            .map(|group| ValidationGroup {
                name: group.name.clone(),
                validations: group
                    .validations
                    .iter()
                    .filter(|v| config.counts(v))
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Ids of failing soft validations for `step`, in table group order, without repeats.
    pub fn failing_soft_validation_ids(
        &self,
        validations_info: &ValidationsInfo,
        step: WizardStep,
    ) -> Vec<String> {
        let config = self.table.step(step);
        config
            .groups
            .iter()
            .filter_map(|name| validations_info.get(name))
            .flatten()
            .filter(|v| {
                config.counts(v) && config.is_soft(v) && v.status == ValidationStatus::Failure
            })
            .map(|v| v.id.clone())
            .unique()
            .collect()
    }

    /// Aggregate the step relevant results of an already decoded validations map.
    pub fn validations_outcome(
        &self,
        validations_info: &ValidationsInfo,
        step: WizardStep,
    ) -> ValidationsOutcome {
        let config = self.table.step(step);
        relevant(config, validations_info)
            .map(|(soft, status)| match status {
                ValidationStatus::Failure if !soft => ValidationsOutcome::BlockingFailure,
                ValidationStatus::Failure => ValidationsOutcome::SoftFailure,
                ValidationStatus::Pending | ValidationStatus::Unknown => {
                    ValidationsOutcome::Pending
                }
                ValidationStatus::Success | ValidationStatus::Disabled => {
                    ValidationsOutcome::Success
                }
            })
            .min()
            .unwrap_or(ValidationsOutcome::Success)
    }

    /// Status of `host` for `step`.
    ///
    /// A soft failure still reports the step as ready; see [`super::step_sublabel`].
    pub fn step_status(&self, step: WizardStep, host: &Host) -> HostStatus {
        let outcome = self.validations_outcome(&host.validations_info(), step);
        let fatal = self.options.is_fatal(host.status);
        let status = match (self.options.precedence, outcome) {
            (StatusPrecedence::ValidationsFirst, ValidationsOutcome::BlockingFailure) => {
                STEP_STATUS_FAILING
            }
            _ if fatal => host.status,
            (_, ValidationsOutcome::BlockingFailure) => STEP_STATUS_FAILING,
            (_, ValidationsOutcome::Pending) => STEP_STATUS_PENDING,
            (_, ValidationsOutcome::SoftFailure | ValidationsOutcome::Success) => {
                STEP_STATUS_READY
            }
        };
        log::trace!(
            "host {} step {step}: {outcome:?} (host {}) -> {status}",
            host.id,
            host.status
        );
        status
    }
}

/// (is soft, status) of every result the step counts.
fn relevant<'a>(
    config: &'a StepValidations,
    validations_info: &'a ValidationsInfo,
) -> impl Iterator<Item = (bool, ValidationStatus)> + 'a {
    validations_info
        .groups()
        .filter(move |group| config.has_group(&group.name))
        .flat_map(|group| group.validations.iter())
        .filter(move |v| config.counts(v))
        .map(move |v| (config.is_soft(v), v.status))
}
