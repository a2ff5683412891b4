//! Configuration resolution
//!
//! A `chui.yaml` holds one set of global settings and a list of
//! per-environment overrides. Resolution picks the override for the active
//! environment and flattens it over the globals:
//!
//! ```text
//! globals ──┐
//!           ├─ merge ─▶ CompleteConfig (+ derived environmentDomain)
//! override ─┘
//! ```
//!
//! # Example
//!
//! ```
//! use chui_core::config::{EnvironmentSelector, resolve};
//! use chui_meta::{ConfigFile, EnvironmentOverride};
//!
//! let mut doc = ConfigFile::default();
//! doc.globals.root_domain = "example.com".into();
//! doc.environments.push(EnvironmentOverride::new("staging"));
//!
//! let config = resolve(&doc, &EnvironmentSelector::named("staging")).unwrap();
//! assert_eq!(config.environment_domain, "staging.example.com");
//! ```

mod merge;
mod selector;

pub use merge::{
    CompleteConfig, environment_domain, kebab_case, resolve, resolve_globals, select_environment,
};
pub use selector::{ENVIRONMENT_VARIABLE, EnvironmentSelector};
