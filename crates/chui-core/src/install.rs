//! App installation workflows
//!
//! ```text
//! add_app:            check ─▶ clone ─▶ prepare files ─▶ record in chui.yaml ─▶ npm install
//! initialize_project: (clone ─▶ prepare files) for every app, concurrently
//! ```
//!
//! Nothing is rolled back. A failure midway leaves the earlier steps in place
//! and is reported to the caller.

use std::thread;

use chui_fs::NormalizedPath;
use chui_git::CloneOptions;
use chui_meta::{AppInstaller, AppType, ConfigFile, GlobalConfig};

use crate::context::ProjectContext;
use crate::process::ToolRunner;
use crate::template::{app_config_dir, app_dir, load_app_manifest, prepare_app_files, registered_entry};
use crate::validation::{check_app_type, check_app_values, check_reserved_name};
use crate::{Error, Result};

/// Fetches an app's source into its directory.
pub trait AppCloner: Send + Sync {
    fn clone_app(&self, app: &AppInstaller, dest: &NormalizedPath, revision: Option<&str>) -> Result<()>;
}

/// [`AppCloner`] using git. The clone's `origin` is replaced by a `chui` remote.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCloner;

impl AppCloner for GitCloner {
    fn clone_app(&self, app: &AppInstaller, dest: &NormalizedPath, revision: Option<&str>) -> Result<()> {
        chui_git::clone_app(&app.source, dest, &CloneOptions { revision })?;
        Ok(())
    }
}

/// Reject `app` if it cannot join the app list in `globals`.
pub fn check_can_add(app: &AppInstaller, globals: &GlobalConfig) -> Result<()> {
    let position = globals.apps.len();
    check_app_values(position, app)?;
    check_app_type(position, app)?;
    check_reserved_name(position, app)?;

    if app.is(AppType::Infrastructure)
        && globals.apps.iter().any(|existing| existing.is(AppType::Infrastructure))
    {
        return Err(Error::InfrastructureAlreadyConfigured);
    }
    if globals.apps.iter().any(|existing| existing.name == app.name) {
        return Err(Error::DuplicateAppName {
            name: app.name.clone(),
        });
    }
    Ok(())
}

/// Add `app` to the global app list. Infrastructure goes first, everything
/// else is appended.
pub fn insert_app(document: &mut ConfigFile, app: AppInstaller) {
    if app.is(AppType::Infrastructure) {
        document.globals.apps.insert(0, app);
    } else {
        document.globals.apps.push(app);
    }
}

/// Outcome of installing one app.
#[derive(Debug)]
pub struct AppOutcome {
    pub name: String,
    pub result: Result<()>,
}

/// Per-app outcomes of [`Installer::initialize_project`], in app list order.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub outcomes: Vec<AppOutcome>,
}

impl InstallReport {
    /// True when every app installed.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn installed(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_ok())
            .map(|o| o.name.as_str())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.name.as_str(), e)))
    }
}

/// Options for [`Installer::add_app`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions<'a> {
    /// Branch, tag or commit to check out after cloning
    pub revision: Option<&'a str>,
    /// Skip `npm install` in the app's `.chui` directory
    pub skip_dependencies: bool,
}

/// Runs install workflows against a project.
pub struct Installer<'a> {
    cloner: &'a dyn AppCloner,
    runner: &'a dyn ToolRunner,
}

impl<'a> Installer<'a> {
    pub fn new(cloner: &'a dyn AppCloner, runner: &'a dyn ToolRunner) -> Self {
        Self { cloner, runner }
    }

    /// Install one app into the project and record it in `chui.yaml`.
    ///
    /// Returns the entry as recorded, with role, variant and version taken
    /// from the app's own descriptor where it declares them.
    pub fn add_app(
        &self,
        context: &mut ProjectContext,
        app: AppInstaller,
        options: &AddOptions<'_>,
    ) -> Result<AppInstaller> {
        let globals = context.globals();
        check_can_add(&app, &globals)?;

        let root = context.root().clone();
        tracing::info!(app = %app.name, role = %app.app_type, "Adding app");

        self.cloner
            .clone_app(&app, &app_dir(&root, &app), options.revision)?;
        prepare_app_files(&globals, &app, &root)?;

        let manifest = load_app_manifest(&root, &app)?;
        let entry = registered_entry(&app, &manifest);
        // The descriptor may declare a different role than was requested.
        check_can_add(&entry, &globals)?;
        if let (Ok(role), Some(variant)) = (entry.role(), entry.variant.as_deref()) {
            let known = role.known_variants();
            if !known.is_empty() && !known.contains(&variant) {
                tracing::warn!(app = %entry.name, %variant, known = ?known, "Unrecognized {role} variant");
            }
        }
        context.update_document(|document| {
            insert_app(document, entry.clone());
            Ok(())
        })?;

        if !options.skip_dependencies {
            let config_dir = app_config_dir(&root, &app);
            self.runner
                .run("npm", &["install"], config_dir.to_native().as_path())?;
        }

        tracing::info!(app = %entry.name, "App added");
        Ok(entry)
    }

    /// Clone and prepare every app of `globals` under `root`.
    ///
    /// Apps are independent of each other and are installed concurrently.
    pub fn initialize_project(&self, root: &NormalizedPath, globals: &GlobalConfig) -> InstallReport {
        let outcomes = thread::scope(|scope| {
            let handles: Vec<_> = globals
                .apps
                .iter()
                .map(|app| (app, scope.spawn(move || self.install_one(root, globals, app))))
                .collect();

            handles
                .into_iter()
                .map(|(app, handle)| AppOutcome {
                    name: app.name.clone(),
                    result: handle.join().unwrap_or_else(|_| {
                        Err(Error::ToolFailed {
                            command: format!("install {}", app.name),
                            exit_code: None,
                        })
                    }),
                })
                .collect()
        });

        let report = InstallReport { outcomes };
        for (name, err) in report.failures() {
            tracing::warn!(app = name, error = %err, "App was not installed");
        }
        report
    }

    fn install_one(&self, root: &NormalizedPath, globals: &GlobalConfig, app: &AppInstaller) -> Result<()> {
        check_app_values(0, app)?;
        tracing::info!(app = %app.name, "Cloning");
        self.cloner.clone_app(app, &app_dir(root, app), None)?;
        prepare_app_files(globals, app, root)
    }
}
