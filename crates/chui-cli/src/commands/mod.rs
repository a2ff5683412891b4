//! Command implementations for chui-cli

pub mod app;
pub mod config;
pub mod env;
pub mod init;
pub mod stack;

use std::path::Path;

use chui_core::{EnvironmentSelector, ProjectContext};

use crate::error::Result;

pub use app::{AppRequest, run_app_add, run_app_catalog, run_app_current};
pub use config::{run_config_show, run_validate};
pub use env::{run_env_add, run_env_list};
pub use init::{NewProject, run_init};
pub use stack::run_stack;

/// Discover the project from `cwd` and select `env` (or `CHUI_ENV`).
fn project_for_env(cwd: &Path, env: Option<&str>) -> Result<ProjectContext> {
    let environment = EnvironmentSelector::explicit_or_env(env)?;
    Ok(ProjectContext::discover(cwd)?.with_environment(environment))
}
