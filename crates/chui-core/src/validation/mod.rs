//! Validation engine
//!
//! An ordered list of named, independent checks run over a
//! [`CompleteConfig`]. Checks come in three shapes:
//!
//! - **config** rules look at the merged configuration as a whole,
//! - **app** rules run once per app, in list order,
//! - **app list** rules look at the list as a unit (ordering, completeness).
//!
//! Validation stops at the first failing rule. [`Mode::Bootstrapping`]
//! skips every rule.

mod rules;

pub use rules::{
    RESERVED_NAMES, check_app_type, check_app_values, check_infrastructure_first,
    check_required_fields, check_required_roles, check_reserved_name, check_unique_names,
};

use chui_meta::AppInstaller;

use crate::config::CompleteConfig;
use crate::{Mode, Result};

/// A check over the whole merged configuration.
pub type ConfigCheck = fn(&CompleteConfig) -> Result<()>;

/// A check over one app; receives the app's position in the list.
pub type AppCheck = fn(usize, &AppInstaller) -> Result<()>;

/// A check over the app list as a unit.
pub type AppListCheck = fn(&[AppInstaller]) -> Result<()>;

/// What a [`Rule`] inspects.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    Config(ConfigCheck),
    App(AppCheck),
    AppList(AppListCheck),
}

/// A named validation rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: Check,
}

impl Rule {
    pub const fn config(name: &'static str, check: ConfigCheck) -> Self {
        Self {
            name,
            check: Check::Config(check),
        }
    }

    pub const fn app(name: &'static str, check: AppCheck) -> Self {
        Self {
            name,
            check: Check::App(check),
        }
    }

    pub const fn app_list(name: &'static str, check: AppListCheck) -> Self {
        Self {
            name,
            check: Check::AppList(check),
        }
    }

    fn run(&self, config: &CompleteConfig) -> Result<()> {
        match self.check {
            Check::Config(check) => check(config),
            Check::App(check) => config
                .apps
                .iter()
                .enumerate()
                .try_for_each(|(index, app)| check(index, app)),
            Check::AppList(check) => check(&config.apps),
        }
    }
}

/// The rules every configuration must satisfy, in evaluation order.
pub const STANDARD_RULES: [Rule; 7] = [
    Rule::config("required-fields", check_required_fields),
    Rule::app("app-values", check_app_values),
    Rule::app("app-type", check_app_type),
    Rule::app("reserved-name", check_reserved_name),
    Rule::app_list("infrastructure-first", check_infrastructure_first),
    Rule::app_list("required-roles", check_required_roles),
    Rule::app_list("unique-names", check_unique_names),
];

/// Ordered rule pipeline.
///
/// ```
/// use chui_core::Validator;
///
/// let validator = Validator::standard();
/// assert_eq!(validator.rule_names().first(), Some(&"required-fields"));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::standard()
    }
}

impl Validator {
    /// An empty pipeline.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in rules.
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// Append a rule; it runs after every existing rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }

    /// Run every rule in order, stopping at the first failure.
    pub fn validate(&self, config: &CompleteConfig, mode: Mode) -> Result<()> {
        if !mode.enforces_rules() {
            tracing::debug!(environment = %config.environment, "Bootstrapping, validation skipped");
            return Ok(());
        }

        for rule in &self.rules {
            if let Err(err) = rule.run(config) {
                tracing::debug!(rule = rule.name, error = %err, "Validation failed");
                return Err(err);
            }
        }

        tracing::debug!(
            environment = %config.environment,
            rules = self.rules.len(),
            "Configuration is valid"
        );
        Ok(())
    }
}
