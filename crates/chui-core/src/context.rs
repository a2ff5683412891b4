//! Per-invocation project state
//!
//! A [`ProjectContext`] owns the project root and the loaded `chui.yaml`, and
//! computes the validated [`CompleteConfig`] at most once. Nothing here is
//! global: two contexts never share state.

use std::cell::OnceCell;
use std::path::Path;

use chui_fs::{ChuiPath, NormalizedPath, find_project_root, find_up};
use chui_meta::{ConfigFile, GlobalConfig};

use crate::config::{CompleteConfig, EnvironmentSelector, resolve, resolve_globals};
use crate::stack::StackResolver;
use crate::validation::Validator;
use crate::{Error, Mode, Result};

#[derive(Debug)]
pub struct ProjectContext {
    root: NormalizedPath,
    document: ConfigFile,
    environment: Option<EnvironmentSelector>,
    mode: Mode,
    validator: Validator,
    config: OnceCell<CompleteConfig>,
}

impl ProjectContext {
    /// Locate `chui.yaml` from `cwd` upward and load it.
    pub fn discover(cwd: &Path) -> Result<Self> {
        let root = find_project_root(cwd).map_err(|e| match e {
            chui_fs::Error::NotFound { .. } => Error::ConfigNotFound(e),
            other => Error::Fs(other),
        })?;
        Self::load(root)
    }

    /// Load `chui.yaml` from `root`.
    pub fn load(root: impl Into<NormalizedPath>) -> Result<Self> {
        let root = root.into();
        let path = root.join(ChuiPath::ConfigFile);
        if !path.is_file() {
            return Err(Error::ConfigNotFound(chui_fs::Error::NotFound {
                file_name: ChuiPath::ConfigFile.to_string(),
                start: root.to_native(),
            }));
        }
        let document = ConfigFile::load(&path)?;
        tracing::debug!(root = %root, environments = document.environments.len(), "Loaded project");
        Ok(Self::at_root(root, document))
    }

    /// A context rooted at `root` holding `document`, for scaffolding a
    /// project that does not exist on disk yet.
    pub fn at_root(root: impl Into<NormalizedPath>, document: ConfigFile) -> Self {
        Self {
            root: root.into(),
            document,
            environment: None,
            mode: Mode::Normal,
            validator: Validator::standard(),
            config: OnceCell::new(),
        }
    }

    pub fn with_environment(mut self, environment: EnvironmentSelector) -> Self {
        self.environment = Some(environment);
        self.reset();
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self.reset();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self.reset();
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config_path(&self) -> NormalizedPath {
        self.root.join(ChuiPath::ConfigFile)
    }

    pub fn document(&self) -> &ConfigFile {
        &self.document
    }

    pub fn environment(&self) -> Option<&EnvironmentSelector> {
        self.environment.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Base Configuration, independent of any environment.
    pub fn globals(&self) -> GlobalConfig {
        resolve_globals(&self.document)
    }

    /// The merged, validated configuration for the selected environment.
    ///
    /// Computed on first call and cached. A configuration that fails to
    /// resolve or validate is not cached, so the next call retries.
    pub fn config(&self) -> Result<&CompleteConfig> {
        if let Some(config) = self.config.get() {
            return Ok(config);
        }

        let environment = self
            .environment
            .as_ref()
            .ok_or(Error::EnvironmentNotSelected)?;
        let config = resolve(&self.document, environment)?;
        self.validator.validate(&config, self.mode)?;

        Ok(self.config.get_or_init(|| config))
    }

    /// Drop the cached configuration.
    pub fn reset(&mut self) {
        self.config.take();
    }

    /// Apply `change` to the document, save it, and drop the cache.
    pub fn update_document<T>(&mut self, change: impl FnOnce(&mut ConfigFile) -> Result<T>) -> Result<T> {
        let mut document = self.document.clone();
        let result = change(&mut document)?;
        document.save(&self.config_path())?;
        tracing::info!(path = %self.config_path(), "Saved project config");
        self.document = document;
        self.reset();
        Ok(result)
    }

    /// Write the current document to `chui.yaml`.
    pub fn save(&self) -> Result<()> {
        self.document.save(&self.config_path())?;
        Ok(())
    }

    /// Resolver over the validated configuration for `stack`.
    pub fn resolver<'a>(&'a self, stack: &'a str) -> Result<StackResolver<'a>> {
        Ok(StackResolver::new(self.config()?, stack))
    }
}

/// Name of the app whose directory contains `cwd`.
///
/// An app directory is one holding a `.chui` directory.
pub fn current_app_name(cwd: &Path) -> Result<String> {
    let config_dir = find_up(cwd, ChuiPath::AppConfigDir.as_str()).map_err(|e| match e {
        chui_fs::Error::NotFound { .. } => Error::NotInApp,
        other => Error::Fs(other),
    })?;
    if !config_dir.is_dir() {
        return Err(Error::NotInApp);
    }

    config_dir
        .parent()
        .and_then(|dir| dir.file_name().map(str::to_string))
        .ok_or(Error::NotInApp)
}
