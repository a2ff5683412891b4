//! Stack command

use std::path::Path;

use chui_meta::AppType;

use super::project_for_env;
use crate::cli::StackLookup;
use crate::error::Result;

/// Print the stack reference for `lookup`. The selector defaults to the
/// environment name.
pub fn run_stack(cwd: &Path, env: Option<&str>, stack: Option<&str>, lookup: &StackLookup) -> Result<()> {
    let context = project_for_env(cwd, env)?;
    let environment = context.config()?.environment.clone();
    let selector = stack.unwrap_or(&environment);
    let resolver = context.resolver(selector)?;

    let reference = match lookup {
        StackLookup::Role { role } => resolver.by_role(role.parse::<AppType>()?)?,
        StackLookup::Name { name } => resolver.by_name(name)?,
        StackLookup::Source { source } => resolver.by_source(source)?,
    };

    println!("{reference}");
    Ok(())
}
