//! End-to-end tests for the `chui` binary

use assert_cmd::Command;
use chui_test_utils::TestProject;
use chui_test_utils::git::{SAMPLE_APP_FILES, app_source_repo};
use predicates::prelude::*;
use tempfile::TempDir;

/// A `chui` command with no inherited Chui environment.
fn chui_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chui").expect("Failed to find chui binary");
    cmd.env_remove("CHUI_ENV")
        .env_remove("CHUI_STACK")
        .env_remove("CHUI_CATALOG_URL")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_help_lists_commands() {
    chui_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("stack"));
}

#[test]
fn test_outside_project_fails() {
    let dir = TempDir::new().unwrap();

    chui_cmd()
        .current_dir(dir.path())
        .args(["--env", "staging", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Chui config file found"));
}

// ============================================================================
// validate / config show
// ============================================================================

#[test]
fn test_validate_lists_rules() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .env("CHUI_ENV", "staging")
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("required-roles"))
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn test_validate_without_environment_fails() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No environment selected"));
}

#[test]
fn test_validate_reports_missing_role() {
    let project = TestProject::new().with_config(
        "globals:\n  rootDomain: example.com\n  globalAppName: acme\n  apps: []\nenvironments:\n  - environment: dev\n",
    );

    chui_cmd()
        .current_dir(project.root())
        .args(["--env", "dev", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chui requires an app of type ingress-controller"));
}

#[test]
fn test_unknown_environment_fails() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .args(["--env", "qa", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching config for environment: qa"));
}

#[test]
fn test_config_show_json() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .args(["--env", "production", "config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"environmentDomain\": \"acme.io\""));
}

#[test]
fn test_config_show_yaml() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .args(["--env", "staging", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("environmentDomain: staging.example.com"));
}

// ============================================================================
// env
// ============================================================================

#[test]
fn test_env_add_and_list() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .args(["env", "add", "qaTeam"])
        .assert()
        .success();

    chui_cmd()
        .current_dir(project.root())
        .args(["env", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qa-team.example.com"))
        .stdout(predicate::str::contains("acme.io"));
}

#[test]
fn test_env_add_replaces_domain() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .args(["env", "add", "production", "--domain", "acme.dev"])
        .assert()
        .success();

    project.assert_file_contains("chui.yaml", "environmentDomain: acme.dev");
    assert!(!project.read_file("chui.yaml").contains("acme.io"));
}

// ============================================================================
// stack
// ============================================================================

#[test]
fn test_stack_role_defaults_to_environment() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .args(["--env", "staging", "stack", "role", "ingress-controller"])
        .assert()
        .success()
        .stdout("acme-org/acme-ingress/staging\n");
}

#[test]
fn test_stack_selector_from_env_var() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .env("CHUI_ENV", "staging")
        .env("CHUI_STACK", "blue")
        .args(["stack", "name", "cm"])
        .assert()
        .success()
        .stdout("acme-org/acme-cm/blue\n");
}

#[test]
fn test_stack_unknown_source() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .args(["--env", "staging", "stack", "source", "https://example.com/none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No app from \"https://example.com/none\" defined"));
}

#[test]
fn test_stack_invalid_role() {
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .args(["--env", "staging", "stack", "role", "load-balancer"])
        .assert()
        .failure();
}

// ============================================================================
// init / app
// ============================================================================

#[test]
fn test_init_new_project() {
    let dir = TempDir::new().unwrap();

    chui_cmd()
        .current_dir(dir.path())
        .args([
            "init", "stack", "--domain", "example.com", "--name", "acme", "--environment", "staging",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project initialized"));

    let written = std::fs::read_to_string(dir.path().join("stack/chui.yaml")).unwrap();
    assert!(written.contains("globalAppName: acme"));
    assert!(written.contains("pulumiOrgName: acme"));
    assert!(written.contains("environment: staging"));
}

#[test]
fn test_init_without_settings_fails() {
    let dir = TempDir::new().unwrap();

    chui_cmd()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--domain"));
}

#[test]
fn test_init_clones_listed_apps() {
    let sources = TempDir::new().unwrap();
    let ingress = sources.path().join("ingress");
    app_source_repo(&ingress, SAMPLE_APP_FILES);
    let project = TestProject::new().with_config(&format!(
        "globals:\n  rootDomain: example.com\n  globalAppName: acme\n  pulumiOrgName: acme-org\n  apps:\n    - source: {}\n      name: ingress\n      type: ingress-controller\nenvironments: []\n",
        ingress.display()
    ));

    chui_cmd()
        .current_dir(project.root())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("ingress"));

    project.assert_file_contains("ingress/.chui/Pulumi.yaml", "name: acme-ingress");
}

#[test]
fn test_app_add_and_current() {
    let sources = TempDir::new().unwrap();
    let auth = sources.path().join("chui-auth-keycloak");
    app_source_repo(&auth, SAMPLE_APP_FILES);
    let project = TestProject::new().with_minimal_config();

    chui_cmd()
        .current_dir(project.root())
        .args(["app", "add"])
        .arg(&auth)
        .args(["--name", "auth", "--type", "auth", "--variant", "keycloak", "--skip-install"])
        .assert()
        .success();

    project.assert_file_contains("chui.yaml", "name: auth");
    project.assert_file_contains("auth/chui-app.yaml", "globalAppName: acme");

    chui_cmd()
        .current_dir(project.path("auth/.chui"))
        .args(["app", "current"])
        .assert()
        .success()
        .stdout("auth\n");
}

#[test]
fn test_app_add_rejects_second_infrastructure() {
    let project = TestProject::new().with_config(
        "globals:\n  rootDomain: example.com\n  globalAppName: acme\n  apps:\n    - source: https://github.com/chuistack/chui-infrastructure-digitalocean\n      name: do\n      type: infrastructure\nenvironments: []\n",
    );

    chui_cmd()
        .current_dir(project.root())
        .args(["app", "add", "https://example.com/aws", "--name", "aws", "--type", "infrastructure"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Infrastructure already configured"));
    project.assert_file_not_exists("aws");
}

#[test]
fn test_app_catalog_unreachable() {
    chui_cmd()
        .env("CHUI_CATALOG_URL", "http://127.0.0.1:9/apps.yaml")
        .args(["app", "catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load app catalog"));
}
