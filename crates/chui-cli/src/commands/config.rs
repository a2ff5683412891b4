//! Config and validate commands

use std::path::Path;

use colored::Colorize;

use super::project_for_env;
use crate::error::Result;

/// Print the merged configuration for the active environment.
pub fn run_config_show(cwd: &Path, env: Option<&str>, json: bool) -> Result<()> {
    let context = project_for_env(cwd, env)?;
    let config = context.config()?;

    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", serde_yaml::to_string(config)?);
    }
    Ok(())
}

/// Merge and validate, then list the rules that passed.
pub fn run_validate(cwd: &Path, env: Option<&str>) -> Result<()> {
    let context = project_for_env(cwd, env)?;
    let config = context.config()?;

    for rule in context.validator().rule_names() {
        println!("  {} {}", "OK".green(), rule);
    }
    println!(
        "{} Configuration for {} is valid ({} apps)",
        "OK".green().bold(),
        config.environment.cyan(),
        config.apps.len()
    );
    Ok(())
}
