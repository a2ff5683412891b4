//! Tests for the chui.yaml document model

use chui_fs::NormalizedPath;
use chui_meta::{AppInstaller, AppSource, AppType, ConfigFile, DnsSolver, EnvironmentOverride};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

const FULL_DOCUMENT: &str = r#"
version: "1"
globals:
  rootDomain: example.com
  globalAppName: acme
  pulumiOrgName: acme-org
  dnsSolver: cloudflare
  apps:
    - source: https://github.com/chuistack/chui-infrastructure-digitalocean
      directory: infrastructure-do
      type: infrastructure
      variant: digitalocean
    - source: https://github.com/chuistack/chui-ingress-kube-nginx
      name: ingress
      type: ingress-controller
      version: "0.3.0"
environments:
  - environment: staging
  - environment: production
    environmentDomain: acme.io
    globalAppName: acme-prod
"#;

#[test]
fn test_parse_full_document() {
    let doc: ConfigFile = serde_yaml::from_str(FULL_DOCUMENT).unwrap();

    assert_eq!(doc.version, "1");
    assert_eq!(doc.globals.root_domain, "example.com");
    assert_eq!(doc.globals.pulumi_org_name, "acme-org");
    assert_eq!(doc.globals.dns_solver, Some(DnsSolver::Cloudflare));
    assert_eq!(doc.globals.apps.len(), 2);
    assert_eq!(doc.environments.len(), 2);

    let production = &doc.environments[1];
    assert_eq!(production.environment_domain.as_deref(), Some("acme.io"));
    assert_eq!(production.overrides.global_app_name.as_deref(), Some("acme-prod"));
    assert!(production.overrides.apps.is_none());
    assert!(doc.environments[0].overrides.is_empty());
}

#[test]
fn test_directory_is_an_alias_for_name() {
    let doc: ConfigFile = serde_yaml::from_str(FULL_DOCUMENT).unwrap();

    assert_eq!(doc.globals.apps[0].name, "infrastructure-do");
    assert_eq!(doc.globals.apps[0].role().unwrap(), AppType::Infrastructure);
    assert_eq!(doc.globals.apps[1].version.as_deref(), Some("0.3.0"));
}

#[test]
fn test_unknown_app_type_still_loads() {
    let yaml = "source: x\nname: y\ntype: load-balancer\n";
    let app: AppInstaller = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(app.app_type, "load-balancer");
    assert!(app.role().is_err());
}

#[test]
fn test_missing_required_fields_default_to_empty() {
    let doc: ConfigFile = serde_yaml::from_str("globals:\n  apps:\n    - name: lonely\n").unwrap();

    assert_eq!(doc.version, ConfigFile::CURRENT_VERSION);
    assert!(doc.globals.root_domain.is_empty());
    assert!(doc.globals.apps[0].source.is_empty());
    assert!(doc.environments.is_empty());
}

#[rstest]
#[case("source: https://x/ingress\ntype: ingress-controller\n", Some(AppType::IngressController))]
#[case("source: https://x/thing\n", None)]
fn test_parse_catalog_entry(#[case] yaml: &str, #[case] expected: Option<AppType>) {
    let entry: AppSource = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(entry.app_type, expected);
}

#[test]
fn test_save_omits_unset_optionals_and_uses_name() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("chui.yaml"));

    let mut doc = ConfigFile::default();
    doc.globals.root_domain = "example.com".into();
    doc.globals
        .apps
        .push(AppInstaller::new("https://x/cm", "cm", AppType::CertManager));
    doc.environments.push(EnvironmentOverride::new("dev"));
    doc.save(&path).unwrap();

    let written = std::fs::read_to_string(path.to_native()).unwrap();
    assert!(written.contains("name: cm"));
    assert!(written.contains("type: cert-manager"));
    assert!(!written.contains("directory"));
    assert!(!written.contains("variant"));
    assert!(!written.contains("environmentDomain"));

    let reloaded = ConfigFile::load(&path).unwrap();
    assert_eq!(reloaded, doc);
}

#[test]
fn test_environment_names_in_document_order() {
    let doc: ConfigFile = serde_yaml::from_str(FULL_DOCUMENT).unwrap();
    let names: Vec<_> = doc.environment_names().collect();
    assert_eq!(names, vec!["staging", "production"]);
}
