//! Built-in validation rules
//!
//! Every rule is a plain function returning `Ok(())` or the first violation
//! it finds.

use std::collections::HashSet;

use chui_meta::{AppInstaller, AppType};

use crate::config::CompleteConfig;
use crate::{Error, Result};

/// App names taken by the core platform app and the infrastructure-provider app.
pub const RESERVED_NAMES: [&str; 2] = ["core", "infrastructure"];

/// Roles every deployable stack needs.
const REQUIRED_ROLES: [AppType; 2] = [AppType::IngressController, AppType::CertManager];

/// `environment`, `globalAppName` and `rootDomain` must be set.
pub fn check_required_fields(config: &CompleteConfig) -> Result<()> {
    let fields = [
        ("environment", &config.environment),
        ("globalAppName", &config.global_app_name),
        ("rootDomain", &config.root_domain),
    ];

    match fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(Error::MissingField {
            field,
            environment: config.environment.clone(),
        }),
        None => Ok(()),
    }
}

/// `source`, `name` and `type` must be set, and `name` must be usable as a
/// directory directly under the project root.
pub fn check_app_values(index: usize, app: &AppInstaller) -> Result<()> {
    if [&app.source, &app.name, &app.app_type]
        .iter()
        .any(|value| value.trim().is_empty())
    {
        return Err(Error::AppMissingValues { index });
    }
    if app.name.contains(['/', '\\']) || app.name.contains("..") {
        return Err(Error::UnsafeAppName {
            name: app.name.clone(),
        });
    }
    Ok(())
}

pub fn check_app_type(_index: usize, app: &AppInstaller) -> Result<()> {
    app.role().map(|_| ()).map_err(|_| Error::InvalidAppType {
        app_type: app.app_type.clone(),
    })
}

pub fn check_reserved_name(_index: usize, app: &AppInstaller) -> Result<()> {
    if RESERVED_NAMES.contains(&app.name.as_str()) {
        return Err(Error::ReservedName {
            name: app.name.clone(),
            reserved: RESERVED_NAMES.to_vec(),
        });
    }
    Ok(())
}

/// An Infrastructure app, if present, must be first.
pub fn check_infrastructure_first(apps: &[AppInstaller]) -> Result<()> {
    match apps.iter().position(|app| app.is(AppType::Infrastructure)) {
        Some(position) if position > 0 => Err(Error::InfrastructureNotFirst { position }),
        _ => Ok(()),
    }
}

pub fn check_required_roles(apps: &[AppInstaller]) -> Result<()> {
    for role in REQUIRED_ROLES {
        if !apps.iter().any(|app| app.is(role)) {
            return Err(Error::MissingRole { role });
        }
    }
    Ok(())
}

pub fn check_unique_names(apps: &[AppInstaller]) -> Result<()> {
    let mut seen = HashSet::new();
    for app in apps {
        if !seen.insert(app.name.as_str()) {
            return Err(Error::DuplicateAppName {
                name: app.name.clone(),
            });
        }
    }
    Ok(())
}
