//! Derivation layer of the cluster installation wizard.
//!
//! Turns a cluster snapshot into the values the wizard displays:
//! humanized subnets, networking form values and a status per
//! (host, wizard step) pair.

pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod snapshot;

use config::{ResolverOptions, WizardStepsValidations};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use processing::StepStatusResolver;
use std::error::Error;

/// Console only logging, used when `log4rs.yml` can't be loaded.
pub fn console_log_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stdout = ConsoleAppender::builder().build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    Ok(config)
}

/// Build a resolver from an optional steps config file, else the built-in table.
pub fn load_resolver(
    steps_config: Option<&str>,
    options: ResolverOptions,
) -> Result<StepStatusResolver, Box<dyn Error>> {
    let table = match steps_config {
        Some(path) => WizardStepsValidations::from_file(path)?,
        None => {
            log::debug!("Using built-in wizard steps table");
            WizardStepsValidations::default()
        }
    };
    Ok(StepStatusResolver::new(table).with_options(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::WizardStep;

    #[test]
    fn test_load_resolver_default() {
        let resolver = load_resolver(None, ResolverOptions::default()).unwrap();
        assert_eq!(resolver.table(), &WizardStepsValidations::default());
    }

    #[test]
    fn test_load_resolver_from_file() {
        let resolver = load_resolver(
            Some("src/tests/test_data/wizard_steps_01.json"),
            ResolverOptions::default(),
        )
        .unwrap();
        assert!(resolver.table().step(WizardStep::Review).groups.is_empty());
        assert!(load_resolver(Some("missing.json"), ResolverOptions::default()).is_err());
    }

    #[test]
    fn test_console_log_config() {
        let config = console_log_config(LevelFilter::Info).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
    }
}
