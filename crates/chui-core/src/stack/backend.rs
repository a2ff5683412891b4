//! Stack outputs

use chui_meta::AppType;
use serde_json::Value;

use super::resolver::{StackReference, StackResolver};
use crate::Result;

/// Output exported by ingress controller apps.
pub const INGRESS_CLASS_ANNOTATION: &str = "ingressClassAnnotation";

/// Outputs exported by cert manager apps.
pub const PRODUCTION_CLUSTER_ISSUER_ANNOTATION: &str = "productionClusterIssuerAnnotation";
pub const STAGING_CLUSTER_ISSUER_ANNOTATION: &str = "stagingClusterIssuerAnnotation";

/// Reads outputs from deployed stacks.
///
/// Chui does not deploy anything itself; the deployment engine supplies an
/// implementation.
pub trait StackBackend {
    /// Read output `key` of `stack`. Missing outputs are an
    /// [`Error::StackOutput`](crate::Error::StackOutput).
    fn output(&self, stack: &StackReference, key: &str) -> Result<Value>;
}

fn role_output(
    backend: &dyn StackBackend,
    resolver: &StackResolver<'_>,
    role: AppType,
    key: &str,
) -> Result<Value> {
    let stack = resolver.by_role(role)?;
    backend.output(&stack, key)
}

pub fn ingress_class_annotation(
    backend: &dyn StackBackend,
    resolver: &StackResolver<'_>,
) -> Result<Value> {
    role_output(backend, resolver, AppType::IngressController, INGRESS_CLASS_ANNOTATION)
}

pub fn production_cluster_issuer_annotation(
    backend: &dyn StackBackend,
    resolver: &StackResolver<'_>,
) -> Result<Value> {
    role_output(
        backend,
        resolver,
        AppType::CertManager,
        PRODUCTION_CLUSTER_ISSUER_ANNOTATION,
    )
}

pub fn staging_cluster_issuer_annotation(
    backend: &dyn StackBackend,
    resolver: &StackResolver<'_>,
) -> Result<Value> {
    role_output(
        backend,
        resolver,
        AppType::CertManager,
        STAGING_CLUSTER_ISSUER_ANNOTATION,
    )
}
