//! Static configuration consumed by the step status resolver.
//!
//! - [`WizardStepsValidations`] - which validation groups belong to each wizard step
//! - [`ResolverOptions`] - how host lifecycle states rank against validation results

mod steps;

pub use steps::{StepValidations, WizardStepsValidations};

use crate::models::HostStatus;
use serde::{Deserialize, Serialize};

/// Which signal wins when a host is in a fatal state and also fails a blocking validation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPrecedence {
    /// Fatal host states dominate validation results.
    #[default]
    HostStateFirst,
    /// Blocking validation failures dominate fatal host states.
    ValidationsFirst,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ResolverOptions {
    pub precedence: StatusPrecedence,
    /// Host states reported as-is instead of a validation-derived status.
    pub fatal_host_states: Vec<HostStatus>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions {
            precedence: StatusPrecedence::default(),
            fatal_host_states: vec![HostStatus::Error, HostStatus::Cancelled],
        }
    }
}

impl ResolverOptions {
    pub fn is_fatal(&self, status: HostStatus) -> bool {
        self.fatal_host_states.contains(&status)
    }
}
