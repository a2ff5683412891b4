//! [`TestProject`] builder for Chui project scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A `chui.yaml` with an ingress controller, a cert manager and two
/// environments (`staging` with a derived domain, `production` with an
/// explicit one).
pub fn minimal_config_yaml() -> &'static str {
    r#"version: "1"
globals:
  rootDomain: example.com
  globalAppName: acme
  pulumiOrgName: acme-org
  apps:
    - source: https://github.com/chuistack/chui-ingress-kube-nginx
      name: ingress
      type: ingress-controller
      variant: kube-nginx
    - source: https://github.com/chuistack/chui-cert-manager
      name: cm
      type: cert-manager
environments:
  - environment: staging
  - environment: production
    environmentDomain: acme.io
"#
}

/// A temporary project directory with helpers for setup and assertion.
///
/// ```rust,no_run
/// use chui_test_utils::TestProject;
///
/// let project = TestProject::new().with_minimal_config();
/// project.assert_file_exists("chui.yaml");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `relative` under the project root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `chui.yaml` with the given content.
    pub fn with_config(self, yaml: &str) -> Self {
        fs::write(self.path("chui.yaml"), yaml).unwrap();
        self
    }

    /// Write [`minimal_config_yaml`] as `chui.yaml`.
    pub fn with_minimal_config(self) -> Self {
        self.with_config(minimal_config_yaml())
    }

    /// Create `relative` (and parents) with `content`.
    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    /// Read `relative` as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, relative: &str) -> String {
        let full = self.path(relative);
        fs::read_to_string(&full)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full.display()))
    }

    /// Assert that `relative` exists.
    pub fn assert_file_exists(&self, relative: &str) {
        let full = self.path(relative);
        assert!(full.exists(), "Expected file to exist: {}", full.display());
    }

    /// Assert that `relative` does **not** exist.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let full = self.path(relative);
        assert!(!full.exists(), "Expected file NOT to exist: {}", full.display());
    }

    /// Assert that `relative` contains `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read_file(relative);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            relative,
            content,
            file_content
        );
    }
}
