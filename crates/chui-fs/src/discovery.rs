//! Upward discovery of project markers
//!
//! Commands work from anywhere inside a project: the configuration file is
//! located by walking parent directories, git-style.

use crate::{ChuiPath, Error, NormalizedPath, Result};
use std::path::Path;

/// Find the nearest `name` (file or directory) in `start` or any ancestor.
pub fn find_up(start: &Path, name: &str) -> Result<NormalizedPath> {
    let start = dunce::canonicalize(start).map_err(|e| Error::io(start, e))?;

    for dir in start.ancestors() {
        let candidate = dir.join(name);
        if candidate.exists() {
            tracing::debug!(found = %candidate.display(), "Discovered {}", name);
            return Ok(NormalizedPath::new(candidate));
        }
    }

    Err(Error::NotFound {
        file_name: name.to_string(),
        start,
    })
}

/// Find the directory holding the nearest `chui.yaml`.
pub fn find_project_root(start: &Path) -> Result<NormalizedPath> {
    let config = find_up(start, ChuiPath::ConfigFile.as_str())?;
    config.parent().ok_or_else(|| Error::NotFound {
        file_name: ChuiPath::ConfigFile.to_string(),
        start: start.to_path_buf(),
    })
}
