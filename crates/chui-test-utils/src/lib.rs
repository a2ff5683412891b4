//! Shared test utilities for the chui workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`git`]: app source repositories with real history
//! - [`project`]: [`TestProject`] builder for a project root with `chui.yaml`

pub mod git;
pub mod project;

pub use project::{TestProject, minimal_config_yaml};
