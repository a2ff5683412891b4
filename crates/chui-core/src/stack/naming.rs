//! Resource naming helpers for app code

/// `{app}-{component}-{kind}`, the name of a deployed object.
pub fn object_name(app: &str, component: &str, kind: &str) -> String {
    format!("{app}-{component}-{kind}")
}

/// `{subdomain}.{domain}`
pub fn subdomain_endpoint(domain: &str, subdomain: &str) -> String {
    format!("{subdomain}.{domain}")
}

/// In-cluster hostname of a service. `namespace` defaults to `default`.
pub fn service_hostname(service: &str, namespace: Option<&str>) -> String {
    format!(
        "{service}.{}.svc.cluster.local",
        namespace.unwrap_or("default")
    )
}
