//! End-to-end project lifecycle
//!
//! Scaffold a project, install apps from real git sources, then resolve and
//! address them per environment: init -> app add -> env add -> resolve -> stack.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use chui_core::stack::{
    INGRESS_CLASS_ANNOTATION, PRODUCTION_CLUSTER_ISSUER_ANNOTATION, ingress_class_annotation,
    production_cluster_issuer_annotation,
};
use chui_core::{
    AddOptions, EnvironmentSelector, Error, ErrorKind, GitCloner, Installer, Mode, ProjectContext,
    Result, StackBackend, StackReference, ToolRunner, add_environment,
};
use chui_fs::{ChuiPath, NormalizedPath};
use chui_meta::{AppInstaller, AppType, ConfigFile, GlobalConfig};
use chui_test_utils::git::{SAMPLE_APP_FILES, app_source_repo, tag_head, commit_all};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingRunner {
    dirs: Mutex<Vec<String>>,
}

impl ToolRunner for RecordingRunner {
    fn run(&self, program: &str, _args: &[&str], working_dir: &Path) -> Result<()> {
        assert_eq!(program, "npm");
        self.dirs.lock().unwrap().push(working_dir.display().to_string());
        Ok(())
    }
}

/// Outputs keyed by stack address.
struct MapBackend(HashMap<String, Value>);

impl StackBackend for MapBackend {
    fn output(&self, stack: &StackReference, key: &str) -> Result<Value> {
        self.0
            .get(&format!("{stack}#{key}"))
            .cloned()
            .ok_or_else(|| Error::StackOutput {
                stack: stack.to_string(),
                key: key.to_string(),
                message: "not exported".into(),
            })
    }
}

struct Sources {
    dir: TempDir,
}

impl Sources {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn repo(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        app_source_repo(&path, SAMPLE_APP_FILES);
        path.to_string_lossy().to_string()
    }
}

fn scaffold(root: &Path) -> ProjectContext {
    let mut document = ConfigFile::new(GlobalConfig {
        root_domain: "example.com".into(),
        global_app_name: "acme".into(),
        pulumi_org_name: "acme-org".into(),
        ..GlobalConfig::default()
    });
    add_environment(&mut document, "staging", None);

    let context = ProjectContext::at_root(root, document)
        .with_environment(EnvironmentSelector::named("staging"))
        .with_mode(Mode::Bootstrapping);
    context.config().unwrap();
    context.save().unwrap();
    context
}

// =============================================================================
// Full lifecycle
// =============================================================================

#[test]
fn test_full_lifecycle() {
    let sources = Sources::new();
    let project = TempDir::new().unwrap();
    let root = NormalizedPath::new(project.path());
    scaffold(project.path());

    // An empty project does not validate outside bootstrapping.
    let empty = ProjectContext::discover(project.path())
        .unwrap()
        .with_environment(EnvironmentSelector::named("staging"));
    assert_eq!(empty.config().unwrap_err().kind(), ErrorKind::Validation);

    let runner = RecordingRunner::default();
    let installer = Installer::new(&GitCloner, &runner);
    let mut context = ProjectContext::discover(project.path()).unwrap();

    for (name, role) in [
        ("ingress", AppType::IngressController),
        ("cm", AppType::CertManager),
        ("do", AppType::Infrastructure),
    ] {
        let source = sources.repo(&format!("chui-{name}"));
        installer
            .add_app(&mut context, AppInstaller::new(source, name, role), &AddOptions::default())
            .unwrap();
    }

    // Infrastructure was inserted first; the rest kept their order.
    let names: Vec<_> = context.document().globals.apps.iter().map(|a| a.name.clone()).collect();
    assert_eq!(names, ["do", "ingress", "cm"]);
    assert_eq!(runner.dirs.lock().unwrap().len(), 3);

    for name in ["do", "ingress", "cm"] {
        let pulumi = root.join(name).join(ChuiPath::AppConfigDir).join(ChuiPath::AppPulumiConfig);
        assert!(pulumi.is_file(), "{pulumi} missing");
        let repo = git2::Repository::open(root.join(name).to_native()).unwrap();
        let remotes: Vec<_> = repo.remotes().unwrap().iter().flatten().map(str::to_string).collect();
        assert_eq!(remotes, ["chui"]);
    }

    // Add an environment with an explicit domain and resolve both.
    context
        .update_document(|doc| {
            add_environment(doc, "production", Some("acme.io"));
            Ok(())
        })
        .unwrap();

    let staging = ProjectContext::discover(project.path())
        .unwrap()
        .with_environment(EnvironmentSelector::named("staging"));
    let production = ProjectContext::discover(&project.path().join("cm"))
        .unwrap()
        .with_environment(EnvironmentSelector::named("production"));

    assert_eq!(staging.config().unwrap().environment_domain, "staging.example.com");
    assert_eq!(production.config().unwrap().environment_domain, "acme.io");

    // Address stacks and read their outputs.
    let resolver = production.resolver("production").unwrap();
    assert_eq!(
        resolver.by_role(AppType::Infrastructure).unwrap().to_string(),
        "acme-org/acme-do/production"
    );

    let backend = MapBackend(HashMap::from([
        (
            format!("acme-org/acme-ingress/production#{INGRESS_CLASS_ANNOTATION}"),
            json!({"kubernetes.io/ingress.class": "nginx"}),
        ),
        (
            format!("acme-org/acme-cm/production#{PRODUCTION_CLUSTER_ISSUER_ANNOTATION}"),
            json!({"cert-manager.io/cluster-issuer": "letsencrypt-prod"}),
        ),
    ]));
    assert_eq!(
        ingress_class_annotation(&backend, &resolver).unwrap()["kubernetes.io/ingress.class"],
        "nginx"
    );
    assert_eq!(
        production_cluster_issuer_annotation(&backend, &resolver).unwrap()["cert-manager.io/cluster-issuer"],
        "letsencrypt-prod"
    );
}

// =============================================================================
// Cloning a whole project elsewhere
// =============================================================================

#[test]
fn test_initialize_existing_project_in_new_checkout() {
    let sources = Sources::new();
    let first = TempDir::new().unwrap();
    scaffold(first.path());

    let runner = RecordingRunner::default();
    let installer = Installer::new(&GitCloner, &runner);
    let mut context = ProjectContext::discover(first.path()).unwrap();
    for (name, role) in [("ingress", AppType::IngressController), ("cm", AppType::CertManager)] {
        installer
            .add_app(
                &mut context,
                AppInstaller::new(sources.repo(name), name, role),
                &AddOptions {
                    revision: None,
                    skip_dependencies: true,
                },
            )
            .unwrap();
    }

    // A teammate copies only chui.yaml and initializes their checkout.
    let second = TempDir::new().unwrap();
    std::fs::copy(first.path().join("chui.yaml"), second.path().join("chui.yaml")).unwrap();
    let theirs = ProjectContext::discover(second.path()).unwrap();

    let report = installer.initialize_project(theirs.root(), &theirs.globals());

    assert!(report.is_complete());
    assert!(runner.dirs.lock().unwrap().is_empty());
    let rendered = std::fs::read_to_string(second.path().join("cm/chui-app.yaml")).unwrap();
    assert!(rendered.contains("name: cm"));
}

// =============================================================================
// Pinned revisions
// =============================================================================

#[test]
fn test_add_app_at_tagged_revision() {
    let sources = TempDir::new().unwrap();
    let path = sources.path().join("chui-auth");
    let repo = app_source_repo(&path, SAMPLE_APP_FILES);
    tag_head(&repo, "v1.0.0");
    std::fs::write(path.join("CHANGELOG.md"), "unreleased\n").unwrap();
    commit_all(&repo, "Unreleased change");

    let project = TempDir::new().unwrap();
    scaffold(project.path());
    let mut context = ProjectContext::discover(project.path()).unwrap();

    Installer::new(&GitCloner, &RecordingRunner::default())
        .add_app(
            &mut context,
            AppInstaller::new(path.to_string_lossy(), "auth", AppType::Auth).with_version("v1.0.0"),
            &AddOptions {
                revision: Some("v1.0.0"),
                skip_dependencies: true,
            },
        )
        .unwrap();

    assert!(!project.path().join("auth/CHANGELOG.md").exists());
    let saved = ConfigFile::load(&context.config_path()).unwrap();
    assert_eq!(saved.globals.apps[0].version.as_deref(), Some("v1.0.0"));
}
