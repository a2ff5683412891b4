//! Per-app configuration files
//!
//! Every cloneable app ships two templates. Installing the app renders them
//! next to themselves with the project's names filled in:
//!
//! | Template                      | Rendered to              |
//! |-------------------------------|--------------------------|
//! | `<app>/.chui/chui.Pulumi.yaml`| `<app>/.chui/Pulumi.yaml`|
//! | `<app>/chui-app.sample.yaml`  | `<app>/chui-app.yaml`    |

use chui_fs::{ChuiPath, NormalizedPath, io};
use chui_meta::{AppInstaller, GlobalConfig};

use crate::{Error, Result};

/// Names available to templates as `{{placeholder}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateValues<'a> {
    pub global_app_name: &'a str,
    pub application: &'a str,
    pub pulumi_org_name: &'a str,
}

impl<'a> TemplateValues<'a> {
    pub fn new(globals: &'a GlobalConfig, app: &'a AppInstaller) -> Self {
        Self {
            global_app_name: &globals.global_app_name,
            application: &app.name,
            pulumi_org_name: &globals.pulumi_org_name,
        }
    }

    /// Replace every occurrence of each placeholder in `template`.
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{{globalAppName}}", self.global_app_name)
            .replace("{{application}}", self.application)
            .replace("{{pulumiOrgName}}", self.pulumi_org_name)
    }
}

/// Directory an app is cloned into.
pub fn app_dir(root: &NormalizedPath, app: &AppInstaller) -> NormalizedPath {
    root.join(&app.name)
}

/// `<app>/.chui`, where the app's deployment project lives.
pub fn app_config_dir(root: &NormalizedPath, app: &AppInstaller) -> NormalizedPath {
    app_dir(root, app).join(ChuiPath::AppConfigDir)
}

/// Render both templates of a cloned app.
pub fn prepare_app_files(
    globals: &GlobalConfig,
    app: &AppInstaller,
    root: &NormalizedPath,
) -> Result<()> {
    let values = TemplateValues::new(globals, app);
    let config_dir = app_config_dir(root, app);
    let app_dir = app_dir(root, app);

    render_file(
        &values,
        &config_dir.join(ChuiPath::AppPulumiSample),
        &config_dir.join(ChuiPath::AppPulumiConfig),
    )?;
    render_file(
        &values,
        &app_dir.join(ChuiPath::AppConfigSample),
        &app_dir.join(ChuiPath::AppConfigFile),
    )?;

    tracing::debug!(app = %app.name, "Prepared app files");
    Ok(())
}

fn render_file(
    values: &TemplateValues<'_>,
    template: &NormalizedPath,
    target: &NormalizedPath,
) -> Result<()> {
    let content = io::read_text(template).map_err(|e| Error::Template {
        path: template.to_string(),
        message: e.to_string(),
    })?;
    io::write_text(target, &values.render(&content)).map_err(|e| Error::Template {
        path: target.to_string(),
        message: e.to_string(),
    })
}

/// Read the rendered `chui-app.yaml` of an installed app.
///
/// The descriptor may declare `type`, `variant` and `version`; project-level
/// keys it also carries are ignored.
pub fn load_app_manifest(root: &NormalizedPath, app: &AppInstaller) -> Result<AppInstaller> {
    let path = app_dir(root, app).join(ChuiPath::AppConfigFile);
    let content = io::read_text(&path)?;
    serde_yaml::from_str(&content).map_err(|e| Error::Template {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Combine the requested installer with the app's own descriptor.
///
/// `source` and `name` always come from the request; the descriptor fills in
/// the role, variant and version it declares.
pub fn registered_entry(requested: &AppInstaller, manifest: &AppInstaller) -> AppInstaller {
    AppInstaller {
        source: requested.source.clone(),
        name: requested.name.clone(),
        app_type: if manifest.app_type.is_empty() {
            requested.app_type.clone()
        } else {
            manifest.app_type.clone()
        },
        variant: manifest.variant.clone().or_else(|| requested.variant.clone()),
        version: manifest.version.clone().or_else(|| requested.version.clone()),
    }
}
