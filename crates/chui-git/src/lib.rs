//! Git operations for installing Chui apps
//!
//! Apps are cloned from their source and re-pointed at a `chui` remote so that
//! users can attach their own `origin` afterwards.

pub mod clone;
pub mod error;

pub use clone::{CloneOptions, UPSTREAM_REMOTE, clone_app};
pub use error::{Error, Result};
