//! App roles, provider variants and installer entries
//!
//! # Example YAML
//!
//! ```yaml
//! apps:
//!   - source: https://github.com/chuistack/chui-ingress-kube-nginx
//!     name: ingress
//!     type: ingress-controller
//!     variant: kube-nginx
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The platform function an app provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppType {
    IngressController,
    CertManager,
    Infrastructure,
    Auth,
    Storage,
    Serverless,
    Database,
    App,
}

impl AppType {
    /// Every recognized role, in declaration order.
    pub const ALL: [AppType; 8] = [
        AppType::IngressController,
        AppType::CertManager,
        AppType::Infrastructure,
        AppType::Auth,
        AppType::Storage,
        AppType::Serverless,
        AppType::Database,
        AppType::App,
    ];

    /// Wire value used in `chui.yaml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::IngressController => "ingress-controller",
            AppType::CertManager => "cert-manager",
            AppType::Infrastructure => "infrastructure",
            AppType::Auth => "auth",
            AppType::Storage => "storage",
            AppType::Serverless => "serverless",
            AppType::Database => "database",
            AppType::App => "app",
        }
    }

    /// Provider variants Chui ships for this role. Empty when the role has no
    /// curated providers. Other variants are allowed.
    pub fn known_variants(&self) -> &'static [&'static str] {
        match self {
            AppType::IngressController => &["kube-nginx"],
            AppType::CertManager => &["cert-manager"],
            AppType::Infrastructure => &["digitalocean"],
            AppType::Auth => &["keycloak"],
            AppType::Storage => &["minio"],
            AppType::Serverless => &["openfaas"],
            AppType::Database | AppType::App => &[],
        }
    }
}

impl FromStr for AppType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AppType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownAppType {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ACME DNS-01 solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DnsSolver {
    Cloudflare,
}

/// Where an app is installed from and to.
///
/// `source` is a git URL (or local path) that is cloned into the directory
/// `name` under the project root. `name` also forms the app's stack address,
/// and is accepted as `directory` on input.
///
/// Every field is lenient on input so that a missing or unknown value is
/// reported by validation with a precise error instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppInstaller {
    #[serde(default)]
    pub source: String,

    #[serde(default, alias = "directory")]
    pub name: String,

    /// Role wire value, see [`AppType`]
    #[serde(default, rename = "type")]
    pub app_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl AppInstaller {
    pub fn new(source: impl Into<String>, name: impl Into<String>, app_type: AppType) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            app_type: app_type.as_str().to_string(),
            variant: None,
            version: None,
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Parse the declared role.
    pub fn role(&self) -> crate::Result<AppType> {
        self.app_type.parse()
    }

    /// Whether the declared role is exactly `role`.
    pub fn is(&self, role: AppType) -> bool {
        self.app_type == role.as_str()
    }
}

/// An entry of the official app catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSource {
    pub source: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub app_type: Option<AppType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}
