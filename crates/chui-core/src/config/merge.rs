//! Environment selection and shallow merge

use std::sync::LazyLock;

use chui_meta::{AppInstaller, ConfigFile, DnsSolver, EnvironmentOverride, GlobalConfig};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::selector::EnvironmentSelector;
use crate::{Error, Result};

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid camel boundary regex"));

/// Runs of characters outside ASCII word characters and the Latin-1 / Latin
/// Extended-A letters `À..=ž`.
static NON_WORD_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_\x{C0}-\x{17E}]+").expect("Invalid separator regex")
});

/// The flattened configuration for one environment.
///
/// Never persisted; computed from a [`ConfigFile`] by [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteConfig {
    pub environment: String,
    pub environment_domain: String,
    pub root_domain: String,
    pub global_app_name: String,
    pub pulumi_org_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_solver: Option<DnsSolver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<String>,
    pub apps: Vec<AppInstaller>,
}

impl CompleteConfig {
    /// Flatten `env` over `globals`. Set override fields win, unset ones fall
    /// through to the global value.
    pub fn merge(globals: &GlobalConfig, env: &EnvironmentOverride) -> Self {
        let overrides = &env.overrides;
        let root_domain = overrides
            .root_domain
            .clone()
            .unwrap_or_else(|| globals.root_domain.clone());

        Self {
            environment_domain: environment_domain(
                &env.environment,
                env.environment_domain.as_deref(),
                &root_domain,
            ),
            environment: env.environment.clone(),
            root_domain,
            global_app_name: overrides
                .global_app_name
                .clone()
                .unwrap_or_else(|| globals.global_app_name.clone()),
            pulumi_org_name: overrides
                .pulumi_org_name
                .clone()
                .unwrap_or_else(|| globals.pulumi_org_name.clone()),
            dns_solver: overrides.dns_solver.or(globals.dns_solver),
            infrastructure: overrides
                .infrastructure
                .clone()
                .or_else(|| globals.infrastructure.clone()),
            apps: overrides
                .apps
                .clone()
                .unwrap_or_else(|| globals.apps.clone()),
        }
    }

    /// The base fields of this configuration as a [`GlobalConfig`].
    pub fn globals(&self) -> GlobalConfig {
        GlobalConfig {
            root_domain: self.root_domain.clone(),
            global_app_name: self.global_app_name.clone(),
            pulumi_org_name: self.pulumi_org_name.clone(),
            dns_solver: self.dns_solver,
            infrastructure: self.infrastructure.clone(),
            apps: self.apps.clone(),
        }
    }
}

/// Find the single override for `environment`.
///
/// Environment names must be unique; this is where that is enforced.
pub fn select_environment<'a>(
    document: &'a ConfigFile,
    environment: &str,
) -> Result<&'a EnvironmentOverride> {
    let mut matches = document
        .environments
        .iter()
        .filter(|env| env.environment == environment);

    match (matches.next(), matches.count()) {
        (None, _) => Err(Error::NoMatchingEnvironment {
            environment: environment.to_string(),
        }),
        (Some(env), 0) => Ok(env),
        (Some(_), rest) => Err(Error::AmbiguousEnvironment {
            environment: environment.to_string(),
            count: rest + 1,
        }),
    }
}

/// Resolve the configuration for the selected environment.
pub fn resolve(document: &ConfigFile, selector: &EnvironmentSelector) -> Result<CompleteConfig> {
    let env = select_environment(document, selector.name())?;
    let config = CompleteConfig::merge(&document.globals, env);
    tracing::debug!(
        environment = %config.environment,
        domain = %config.environment_domain,
        apps = config.apps.len(),
        "Resolved environment config"
    );
    Ok(config)
}

/// The Base Configuration alone, for use before any environment exists.
pub fn resolve_globals(document: &ConfigFile) -> GlobalConfig {
    document.globals.clone()
}

/// Domain for an environment: the explicit override if set, otherwise
/// `kebab(environment).rootDomain`.
pub fn environment_domain(environment: &str, explicit: Option<&str>, root_domain: &str) -> String {
    match explicit {
        Some(domain) if !domain.is_empty() => domain.to_string(),
        _ => format!("{}.{}", kebab_case(environment), root_domain),
    }
}

/// Lower-case, dash-separated form of `input`.
///
/// A lower-case ASCII letter followed by an upper-case one is split
/// (`featureBranch`, but not `dev2Test`). Every run of other characters
/// becomes a single dash; accented Latin letters are kept. Leading and
/// trailing dashes are dropped.
pub fn kebab_case(input: &str) -> String {
    let split = CAMEL_BOUNDARY.replace_all(input.trim(), "$1-$2");
    let dashed = NON_WORD_RUN.replace_all(&split, "-");
    dashed.trim_matches('-').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chui_meta::{AppType, ConfigOverrides};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn globals() -> GlobalConfig {
        GlobalConfig {
            root_domain: "example.com".into(),
            global_app_name: "acme".into(),
            pulumi_org_name: "acme-org".into(),
            apps: vec![AppInstaller::new("src/ingress", "ingress", AppType::IngressController)],
            ..GlobalConfig::default()
        }
    }

    fn document(envs: &[EnvironmentOverride]) -> ConfigFile {
        ConfigFile {
            environments: envs.to_vec(),
            ..ConfigFile::new(globals())
        }
    }

    #[rstest]
    #[case("staging", "staging")]
    #[case("Staging", "staging")]
    #[case("qa one", "qa-one")]
    #[case("featureBranch", "feature-branch")]
    #[case("  Pre  Prod!!", "pre-prod")]
    #[case("dev_2", "dev_2")]
    #[case("--edge--", "edge")]
    #[case("dev2Test", "dev2test")]
    #[case("Préprod", "préprod")]
    #[case("Été Europe", "été-europe")]
    fn test_kebab_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(kebab_case(input), expected);
    }

    #[test]
    fn test_staging_scenario_derives_domain() {
        let doc = document(&[EnvironmentOverride::new("staging")]);

        let config = resolve(&doc, &EnvironmentSelector::named("staging")).unwrap();

        assert_eq!(config.environment_domain, "staging.example.com");
        assert_eq!(config.global_app_name, "acme");
        assert_eq!(config.pulumi_org_name, "acme-org");
    }

    #[test]
    fn test_explicit_domain_wins() {
        let doc = document(&[EnvironmentOverride::new("production").with_domain("acme.io")]);

        let config = resolve(&doc, &EnvironmentSelector::named("production")).unwrap();

        assert_eq!(config.environment_domain, "acme.io");
    }

    #[test]
    fn test_override_root_domain_feeds_derived_domain() {
        let env = EnvironmentOverride {
            environment: "qa".into(),
            environment_domain: None,
            overrides: ConfigOverrides {
                root_domain: Some("acme.dev".into()),
                apps: Some(vec![]),
                ..ConfigOverrides::default()
            },
        };
        let doc = document(&[env]);

        let config = resolve(&doc, &EnvironmentSelector::named("qa")).unwrap();

        assert_eq!(config.root_domain, "acme.dev");
        assert_eq!(config.environment_domain, "qa.acme.dev");
        assert!(config.apps.is_empty());
        assert_eq!(config.global_app_name, "acme");
    }

    #[test]
    fn test_no_matching_environment() {
        let doc = document(&[EnvironmentOverride::new("staging")]);

        let err = resolve(&doc, &EnvironmentSelector::named("production")).unwrap_err();

        assert!(matches!(err, Error::NoMatchingEnvironment { ref environment } if environment == "production"));
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }

    #[test]
    fn test_ambiguous_environment() {
        let doc = document(&[
            EnvironmentOverride::new("staging"),
            EnvironmentOverride::new("dev"),
            EnvironmentOverride::new("staging").with_domain("other.example.com"),
        ]);

        let err = resolve(&doc, &EnvironmentSelector::named("staging")).unwrap_err();

        assert!(matches!(err, Error::AmbiguousEnvironment { count: 2, .. }));
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }

    proptest! {
        #[test]
        fn prop_derived_domain_is_kebab_env_dot_root(
            env in "[A-Za-z][A-Za-z0-9 _-]{0,15}",
            root in "[a-z]{1,10}\\.[a-z]{2,5}",
        ) {
            let mut doc = document(&[EnvironmentOverride::new(env.clone())]);
            doc.globals.root_domain = root.clone();

            let config = resolve(&doc, &EnvironmentSelector::named(env.clone())).unwrap();

            prop_assert_eq!(config.environment_domain, format!("{}.{}", kebab_case(&env), root));
        }

        #[test]
        fn prop_explicit_domain_is_kept(env in "[a-z]{1,12}", domain in "[a-z]{1,10}\\.[a-z]{2,4}") {
            let doc = document(&[EnvironmentOverride::new(env.clone()).with_domain(domain.clone())]);

            let config = resolve(&doc, &EnvironmentSelector::named(env)).unwrap();

            prop_assert_eq!(config.environment_domain, domain);
        }

        #[test]
        fn prop_empty_override_reproduces_globals(env in "[a-z]{1,12}") {
            let doc = document(&[EnvironmentOverride::new(env.clone())]);

            let config = resolve(&doc, &EnvironmentSelector::named(env)).unwrap();

            prop_assert_eq!(config.globals(), doc.globals);
        }

        #[test]
        fn prop_kebab_case_is_idempotent(input in "[A-Za-z0-9 _.-]{0,24}") {
            let once = kebab_case(&input);
            prop_assert_eq!(kebab_case(&once), once.clone());
        }
    }
}
