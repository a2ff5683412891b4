//! Filesystem abstraction for Chui projects
//!
//! Provides normalized paths, atomic writes, format-agnostic document
//! loading and upward discovery of the project configuration file.

pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::ChuiPath;
pub use discovery::{find_project_root, find_up};
pub use error::{Error, Result};
pub use path::NormalizedPath;
