//! `chui.yaml` document types
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1"
//! globals:
//!   rootDomain: example.com
//!   globalAppName: acme
//!   pulumiOrgName: acme-org
//!   apps: []
//! environments:
//!   - environment: staging
//!   - environment: production
//!     environmentDomain: example.com
//! ```

use chui_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use super::app::{AppInstaller, DnsSolver};
use crate::Result;

fn default_version() -> String {
    ConfigFile::CURRENT_VERSION.to_string()
}

/// Settings shared by every environment (the Base Configuration).
///
/// Required values default to empty so that an incomplete document still
/// loads; validation reports the missing field by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    #[serde(default)]
    pub root_domain: String,

    #[serde(default)]
    pub global_app_name: String,

    /// Organizational namespace used in stack addresses
    #[serde(default)]
    pub pulumi_org_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_solver: Option<DnsSolver>,

    /// Infrastructure provider name written by earlier tooling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<String>,

    #[serde(default)]
    pub apps: Vec<AppInstaller>,
}

/// Base fields an environment may restate. Unset fields fall through to
/// [`GlobalConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_app_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulumi_org_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_solver: Option<DnsSolver>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps: Option<Vec<AppInstaller>>,
}

impl ConfigOverrides {
    /// True when no base field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One per-environment override block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentOverride {
    pub environment: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_domain: Option<String>,

    #[serde(flatten)]
    pub overrides: ConfigOverrides,
}

impl EnvironmentOverride {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.environment_domain = Some(domain.into());
        self
    }
}

/// The complete `chui.yaml` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub globals: GlobalConfig,

    #[serde(default)]
    pub environments: Vec<EnvironmentOverride>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            globals: GlobalConfig::default(),
            environments: Vec::new(),
        }
    }
}

impl ConfigFile {
    /// Document schema version written by this crate.
    pub const CURRENT_VERSION: &'static str = "1";

    pub fn new(globals: GlobalConfig) -> Self {
        Self {
            globals,
            ..Self::default()
        }
    }

    /// Load a document; the format follows the file extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Save the document atomically.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        Ok(ConfigStore::new().save(path, self)?)
    }

    /// Names of all declared environments, in document order.
    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environments.iter().map(|e| e.environment.as_str())
    }
}
