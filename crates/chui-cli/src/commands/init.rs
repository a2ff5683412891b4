//! Init command implementation

use std::path::Path;

use chui_core::{
    EnvironmentSelector, GitCloner, Installer, Mode, ProcessRunner, ProjectContext,
    add_environment,
};
use chui_fs::{ChuiPath, NormalizedPath};
use chui_meta::{ConfigFile, GlobalConfig};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Settings for a project that has no `chui.yaml` yet.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub domain: Option<String>,
    pub name: Option<String>,
    pub org: Option<String>,
    pub environments: Vec<String>,
}

impl NewProject {
    fn document(&self) -> Result<ConfigFile> {
        let (Some(domain), Some(name)) = (&self.domain, &self.name) else {
            return Err(CliError::user(
                "No chui.yaml here. Pass --domain and --name to create a new project.",
            ));
        };

        let mut document = ConfigFile::new(GlobalConfig {
            root_domain: domain.clone(),
            global_app_name: name.clone(),
            pulumi_org_name: self.org.clone().unwrap_or_else(|| name.clone()),
            ..GlobalConfig::default()
        });
        for environment in &self.environments {
            add_environment(&mut document, environment, None);
        }
        Ok(document)
    }
}

/// Create `chui.yaml` in `dir` if needed, then clone and prepare every app.
pub fn run_init(dir: &Path, new: &NewProject) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let root = NormalizedPath::new(dunce::canonicalize(dir)?);

    let context = if root.join(ChuiPath::ConfigFile).is_file() {
        ProjectContext::load(root.clone())?
    } else {
        println!("{} Creating {} in {}", "=>".blue().bold(), ChuiPath::ConfigFile, root.as_str().cyan());
        let mut context = ProjectContext::at_root(root.clone(), new.document()?).with_mode(Mode::Bootstrapping);
        if let Some(first) = new.environments.first() {
            context = context.with_environment(EnvironmentSelector::named(first.as_str()));
            context.config()?;
        }
        context.save()?;
        context
    };

    let globals = context.globals();
    if globals.apps.is_empty() {
        println!("{} Project initialized", "OK".green().bold());
        return Ok(());
    }

    println!("{} Installing {} apps...", "=>".blue().bold(), globals.apps.len());
    let report = Installer::new(&GitCloner, &ProcessRunner).initialize_project(&root, &globals);

    for name in report.installed() {
        println!("  {} {}", "OK".green(), name);
    }
    for (name, err) in report.failures() {
        println!("  {} {}: {}", "FAIL".red(), name, err);
    }

    if report.is_complete() {
        println!("{} Project initialized", "OK".green().bold());
        Ok(())
    } else {
        Err(CliError::user("Some apps could not be installed; see above"))
    }
}
