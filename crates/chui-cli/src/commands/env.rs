//! Environment commands

use std::path::Path;

use chui_core::config::environment_domain;
use chui_core::{ProjectContext, add_environment};
use colored::Colorize;

use crate::error::Result;

pub fn run_env_add(cwd: &Path, name: &str, domain: Option<&str>) -> Result<()> {
    let mut context = ProjectContext::discover(cwd)?;
    context.update_document(|document| {
        add_environment(document, name, domain);
        Ok(())
    })?;

    println!("{} Environment {} saved", "OK".green().bold(), name.cyan());
    Ok(())
}

pub fn run_env_list(cwd: &Path) -> Result<()> {
    let context = ProjectContext::discover(cwd)?;
    let document = context.document();

    if document.environments.is_empty() {
        println!("No environments. Use {} to add one.", "chui env add <name>".cyan());
        return Ok(());
    }

    for env in &document.environments {
        let root_domain = env
            .overrides
            .root_domain
            .as_deref()
            .unwrap_or(&document.globals.root_domain);
        let domain = environment_domain(&env.environment, env.environment_domain.as_deref(), root_domain);
        println!("  {:<16} {}", env.environment.green(), domain.dimmed());
    }
    Ok(())
}
