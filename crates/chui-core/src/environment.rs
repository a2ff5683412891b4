//! Environment management

use chui_meta::{ConfigFile, EnvironmentOverride};

use crate::config::select_environment;
use crate::Result;

/// Insert or replace the override named `name`.
///
/// An existing override is replaced in place, keeping its position; a new one
/// is appended.
pub fn add_environment(document: &mut ConfigFile, name: &str, domain: Option<&str>) {
    let mut environment = EnvironmentOverride::new(name);
    environment.environment_domain = domain.filter(|d| !d.is_empty()).map(str::to_string);

    match document
        .environments
        .iter_mut()
        .find(|env| env.environment == name)
    {
        Some(existing) => {
            tracing::debug!(environment = name, "Replacing environment");
            *existing = environment;
        }
        None => {
            tracing::debug!(environment = name, "Adding environment");
            document.environments.push(environment);
        }
    }
}

/// The override for `name`; fails when the document does not declare it.
pub fn ensure_environment<'a>(
    document: &'a ConfigFile,
    name: &str,
) -> Result<&'a EnvironmentOverride> {
    select_environment(document, name)
}
