//! Active environment selection

use crate::{Error, Result};

/// Environment variable naming the active environment.
pub const ENVIRONMENT_VARIABLE: &str = "CHUI_ENV";

/// The environment a configuration is resolved for.
///
/// Read once per resolution: either given explicitly or taken from
/// [`ENVIRONMENT_VARIABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSelector {
    name: String,
}

impl EnvironmentSelector {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Read `CHUI_ENV` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read `CHUI_ENV` through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        lookup(ENVIRONMENT_VARIABLE)
            .filter(|value| !value.trim().is_empty())
            .map(Self::named)
            .ok_or(Error::EnvironmentNotSelected)
    }

    /// Prefer `explicit`, fall back to `CHUI_ENV`.
    pub fn explicit_or_env(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(name) if !name.is_empty() => Ok(Self::named(name)),
            _ => Self::from_env(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for EnvironmentSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
