//! Schema types for `chui.yaml` and the official app catalog

mod app;
mod config;

pub use app::{AppInstaller, AppSource, AppType, DnsSolver};
pub use config::{ConfigFile, ConfigOverrides, EnvironmentOverride, GlobalConfig};
