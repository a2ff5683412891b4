//! Configuration document model for Chui projects.
//!
//! Typed, format-agnostic shape of `chui.yaml`: global settings, the
//! per-environment override blocks and the ordered app list. Behavior beyond
//! loading and saving lives in `chui-core`.

pub mod error;
pub mod schema;

pub use error::{Error, Result};
pub use schema::{
    AppInstaller, AppSource, AppType, ConfigFile, ConfigOverrides, DnsSolver, EnvironmentOverride,
    GlobalConfig,
};
