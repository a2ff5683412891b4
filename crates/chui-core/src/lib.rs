//! Core engine for Chui projects
//!
//! Turns a `chui.yaml` into a validated, environment-specific configuration
//! and drives the workflows that depend on it:
//!
//! - **Merge**: flatten the global settings with one environment's overrides
//! - **Validation**: an ordered, inspectable rule pipeline over the result
//! - **Stack addressing**: resolve installed apps to stack references
//! - **Installation**: clone apps, render their configuration, record them
//!
//! # Architecture
//!
//! ```text
//!                     chui-cli
//!                        |
//!                    chui-core
//!                        |
//!          +-------------+-------------+
//!          |             |             |
//!       chui-fs      chui-meta     chui-git
//! ```
//!
//! # Example
//!
//! ```ignore
//! use chui_core::{EnvironmentSelector, ProjectContext};
//!
//! let context = ProjectContext::discover(&std::env::current_dir()?)?
//!     .with_environment(EnvironmentSelector::from_env()?);
//! let stack = context.resolver("staging")?.by_role(chui_meta::AppType::IngressController)?;
//! println!("{stack}");
//! ```

pub mod catalog;
pub mod config;
pub mod context;
pub mod environment;
pub mod error;
pub mod install;
pub mod mode;
pub mod process;
pub mod stack;
pub mod template;
pub mod validation;

pub use catalog::{
    CATALOG_URL_VARIABLE, Catalog, CatalogSource, DEFAULT_CATALOG_URL, HttpCatalogSource,
};
pub use config::{
    CompleteConfig, ENVIRONMENT_VARIABLE, EnvironmentSelector, kebab_case, resolve,
    resolve_globals,
};
pub use context::{ProjectContext, current_app_name};
pub use environment::{add_environment, ensure_environment};
pub use error::{AppLookup, Error, ErrorKind, Result};
pub use install::{
    AddOptions, AppCloner, AppOutcome, GitCloner, InstallReport, Installer, check_can_add,
    insert_app,
};
pub use mode::Mode;
pub use process::{ProcessRunner, ToolRunner};
pub use stack::{STACK_VARIABLE, StackBackend, StackReference, StackResolver};
pub use template::prepare_app_files;
pub use validation::{RESERVED_NAMES, Rule, Validator};
