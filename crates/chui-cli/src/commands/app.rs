//! App commands

use std::path::Path;

use chui_core::{
    AddOptions, Catalog, GitCloner, HttpCatalogSource, Installer, ProcessRunner, ProjectContext,
    current_app_name,
};
use chui_meta::AppInstaller;
use colored::Colorize;

use crate::error::Result;

/// App as requested on the command line.
#[derive(Debug, Clone)]
pub struct AppRequest {
    pub source: String,
    pub name: String,
    pub app_type: String,
    pub variant: Option<String>,
    pub version: Option<String>,
}

impl From<AppRequest> for AppInstaller {
    fn from(request: AppRequest) -> Self {
        AppInstaller {
            source: request.source,
            name: request.name,
            app_type: request.app_type,
            variant: request.variant,
            version: request.version,
        }
    }
}

pub fn run_app_add(
    cwd: &Path,
    request: AppRequest,
    revision: Option<&str>,
    skip_install: bool,
) -> Result<()> {
    let mut context = ProjectContext::discover(cwd)?;
    let app = AppInstaller::from(request);
    println!(
        "{} Adding {} {}",
        "=>".blue().bold(),
        app.app_type,
        app.name.cyan()
    );

    let entry = Installer::new(&GitCloner, &ProcessRunner).add_app(
        &mut context,
        app,
        &AddOptions {
            revision,
            skip_dependencies: skip_install,
        },
    )?;

    println!(
        "{} Added {} to {}",
        "OK".green().bold(),
        entry.name.cyan(),
        context.config_path()
    );
    Ok(())
}

pub fn run_app_catalog(url: Option<&str>, refresh: bool, json: bool) -> Result<()> {
    let source = match url {
        Some(url) if !url.is_empty() => HttpCatalogSource::new(url),
        _ => HttpCatalogSource::from_env(),
    };
    let mut catalog = Catalog::new(source);
    let entries = catalog.list(refresh)?;

    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    println!("{}", "Official Apps".bold());
    println!();
    for entry in entries {
        let role = entry.app_type.map(|t| t.to_string()).unwrap_or_default();
        let variant = entry.variant.as_deref().unwrap_or_default();
        println!("  {:<20} {:<12} {}", role.green(), variant, entry.source.dimmed());
    }
    println!();
    println!(
        "{} {} apps available. Use {} to add one.",
        "Total:".dimmed(),
        entries.len(),
        "chui app add <source> --name <name> --type <type>".cyan()
    );
    Ok(())
}

pub fn run_app_current(cwd: &Path) -> Result<()> {
    println!("{}", current_app_name(cwd)?);
    Ok(())
}
