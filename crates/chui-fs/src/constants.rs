//! Well-known file and directory names of a Chui project.

use std::path::Path;

/// Fixed names used to lay out a project and its apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChuiPath {
    /// `chui.yaml` at the project root
    ConfigFile,
    /// `.chui` directory inside each app
    AppConfigDir,
    /// `chui-app.yaml` rendered app descriptor
    AppConfigFile,
    /// `chui-app.sample.yaml` app descriptor template
    AppConfigSample,
    /// `chui.Pulumi.yaml` Pulumi project template inside `.chui`
    AppPulumiSample,
    /// `Pulumi.yaml` rendered Pulumi project inside `.chui`
    AppPulumiConfig,
}

impl ChuiPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigFile => "chui.yaml",
            Self::AppConfigDir => ".chui",
            Self::AppConfigFile => "chui-app.yaml",
            Self::AppConfigSample => "chui-app.sample.yaml",
            Self::AppPulumiSample => "chui.Pulumi.yaml",
            Self::AppPulumiConfig => "Pulumi.yaml",
        }
    }
}

impl AsRef<Path> for ChuiPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ChuiPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ChuiPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
