//! Error types for chui-core

use std::fmt;

use chui_meta::AppType;

/// Result type for chui-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A document, environment or app lookup came up empty
    NotFound,
    /// The configuration is structurally invalid or ambiguous
    Config,
    /// The app list violates an ordering, completeness or type rule
    Validation,
    /// A collaborator (git, templates, catalog, shell) failed
    ExternalTool,
    /// Local filesystem failure
    Io,
}

/// How an app was looked up, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppLookup {
    Role(AppType),
    Name(String),
    Source(String),
}

impl fmt::Display for AppLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppLookup::Role(role) => write!(f, "No {role} defined"),
            AppLookup::Name(name) => write!(f, "No app called \"{name}\" defined"),
            AppLookup::Source(source) => write!(f, "No app from \"{source}\" defined"),
        }
    }
}

/// Errors that can occur in chui-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `chui.yaml` on the search path
    #[error("No Chui config file found: {0}")]
    ConfigNotFound(#[source] chui_fs::Error),

    #[error("No environment selected. Set CHUI_ENV or pass an environment explicitly.")]
    EnvironmentNotSelected,

    #[error("No matching config for environment: {environment}")]
    NoMatchingEnvironment { environment: String },

    #[error("More than one config ({count}) for environment: {environment}")]
    AmbiguousEnvironment { environment: String, count: usize },

    #[error("Missing required parameter \"{field}\" in Chui config for environment: {environment}")]
    MissingField {
        field: &'static str,
        environment: String,
    },

    #[error("App name \"{name}\" is reserved. The following names are reserved: {}", .reserved.join(", "))]
    ReservedName {
        name: String,
        reserved: Vec<&'static str>,
    },

    #[error("App at position {index} is missing values (source, name and type are required)")]
    AppMissingValues { index: usize },

    #[error("App name \"{name}\" must be a plain directory name")]
    UnsafeAppName { name: String },

    #[error("{app_type} is not a valid Chui app type")]
    InvalidAppType { app_type: String },

    #[error("Infrastructure app must be first (found at position {position})")]
    InfrastructureNotFirst { position: usize },

    #[error("Chui requires an app of type {role}")]
    MissingRole { role: AppType },

    #[error("App name \"{name}\" is used more than once")]
    DuplicateAppName { name: String },

    #[error("Infrastructure already configured")]
    InfrastructureAlreadyConfigured,

    #[error("{count} apps of type {role} defined; address one by name instead")]
    AmbiguousRole { role: AppType, count: usize },

    #[error("{0}")]
    AppNotFound(AppLookup),

    #[error("Not in a Chui application")]
    NotInApp,

    #[error("Failed to load app catalog from {url}: {message}")]
    Catalog { url: String, message: String },

    #[error("Failed to prepare {path}: {message}")]
    Template { path: String, message: String },

    #[error("Command `{command}` failed{}", .exit_code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    ToolFailed {
        command: String,
        exit_code: Option<i32>,
    },

    #[error("Stack output \"{key}\" unavailable for {stack}: {message}")]
    StackOutput {
        stack: String,
        key: String,
        message: String,
    },

    #[error(transparent)]
    Fs(#[from] chui_fs::Error),

    #[error(transparent)]
    Git(#[from] chui_git::Error),

    #[error(transparent)]
    Meta(#[from] chui_meta::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigNotFound(_) | Error::AppNotFound(_) | Error::NotInApp => {
                ErrorKind::NotFound
            }
            Error::EnvironmentNotSelected
            | Error::NoMatchingEnvironment { .. }
            | Error::AmbiguousEnvironment { .. }
            | Error::MissingField { .. }
            | Error::ReservedName { .. }
            | Error::AmbiguousRole { .. } => ErrorKind::Config,
            Error::AppMissingValues { .. }
            | Error::UnsafeAppName { .. }
            | Error::InvalidAppType { .. }
            | Error::InfrastructureNotFirst { .. }
            | Error::MissingRole { .. }
            | Error::DuplicateAppName { .. }
            | Error::InfrastructureAlreadyConfigured => ErrorKind::Validation,
            Error::Catalog { .. }
            | Error::Template { .. }
            | Error::ToolFailed { .. }
            | Error::StackOutput { .. }
            | Error::Git(_) => ErrorKind::ExternalTool,
            Error::Meta(chui_meta::Error::UnknownAppType { .. }) => ErrorKind::Validation,
            Error::Meta(chui_meta::Error::Fs(e)) | Error::Fs(e) => fs_kind(e),
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

fn fs_kind(error: &chui_fs::Error) -> ErrorKind {
    match error {
        chui_fs::Error::NotFound { .. } => ErrorKind::NotFound,
        chui_fs::Error::ConfigParse { .. } | chui_fs::Error::UnsupportedFormat { .. } => {
            ErrorKind::Config
        }
        _ => ErrorKind::Io,
    }
}
