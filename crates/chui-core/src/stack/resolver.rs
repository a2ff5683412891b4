//! Role, name and source lookups

use std::fmt;

use chui_meta::{AppInstaller, AppType};

use crate::config::CompleteConfig;
use crate::error::AppLookup;
use crate::{Error, Result};

/// Environment variable naming the stack selector.
pub const STACK_VARIABLE: &str = "CHUI_STACK";

/// Address of one app's deployment for one stack selector.
///
/// Displays as `{pulumiOrgName}/{globalAppName}-{appName}/{stack}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackReference {
    pub organization: String,
    pub project: String,
    pub stack: String,
}

impl StackReference {
    pub fn new(config: &CompleteConfig, app_name: &str, stack: &str) -> Self {
        Self {
            organization: config.pulumi_org_name.clone(),
            project: format!("{}-{}", config.global_app_name, app_name),
            stack: stack.to_string(),
        }
    }
}

impl fmt::Display for StackReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.organization, self.project, self.stack)
    }
}

/// Resolves installed apps to [`StackReference`]s.
///
/// Read-only over a validated configuration.
#[derive(Debug, Clone, Copy)]
pub struct StackResolver<'a> {
    config: &'a CompleteConfig,
    stack: &'a str,
}

impl<'a> StackResolver<'a> {
    pub fn new(config: &'a CompleteConfig, stack: &'a str) -> Self {
        Self { config, stack }
    }

    pub fn stack(&self) -> &str {
        self.stack
    }

    /// The single app with `role`.
    ///
    /// Fails with [`Error::AmbiguousRole`] when more than one app declares it;
    /// those apps must be addressed with [`by_name`](Self::by_name).
    pub fn by_role(&self, role: AppType) -> Result<StackReference> {
        let mut matches = self.config.apps.iter().filter(|app| app.is(role));
        match (matches.next(), matches.count()) {
            (None, _) => Err(Error::AppNotFound(AppLookup::Role(role))),
            (Some(app), 0) => Ok(self.reference(app)),
            (Some(_), rest) => Err(Error::AmbiguousRole {
                role,
                count: rest + 1,
            }),
        }
    }

    pub fn by_name(&self, name: &str) -> Result<StackReference> {
        self.find(|app| app.name == name)
            .ok_or_else(|| Error::AppNotFound(AppLookup::Name(name.to_string())))
    }

    pub fn by_source(&self, source: &str) -> Result<StackReference> {
        self.find(|app| app.source == source)
            .ok_or_else(|| Error::AppNotFound(AppLookup::Source(source.to_string())))
    }

    fn find(&self, predicate: impl Fn(&AppInstaller) -> bool) -> Option<StackReference> {
        self.config
            .apps
            .iter()
            .find(|app| predicate(app))
            .map(|app| self.reference(app))
    }

    fn reference(&self, app: &AppInstaller) -> StackReference {
        let reference = StackReference::new(self.config, &app.name, self.stack);
        tracing::debug!(app = %app.name, %reference, "Resolved stack reference");
        reference
    }
}
