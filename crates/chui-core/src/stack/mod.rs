//! App registry resolution
//!
//! Apps deploy as separate stacks. An app that depends on another one (an
//! ingress rule needing the ingress controller's class annotation, say)
//! addresses it through a [`StackReference`] resolved from the merged
//! configuration, then reads outputs from it through a [`StackBackend`].

mod backend;
mod naming;
mod resolver;

pub use backend::{
    INGRESS_CLASS_ANNOTATION, PRODUCTION_CLUSTER_ISSUER_ANNOTATION, STAGING_CLUSTER_ISSUER_ANNOTATION,
    StackBackend, ingress_class_annotation, production_cluster_issuer_annotation,
    staging_cluster_issuer_annotation,
};
pub use naming::{object_name, service_hostname, subdomain_endpoint};
pub use resolver::{STACK_VARIABLE, StackReference, StackResolver};
