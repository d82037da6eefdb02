extern crate futures;
extern crate kube;
extern crate log;
extern crate thiserror;

use kube::error::ConfigError;
use kube::Error as KubeError;
use thiserror::Error as ThisError;

pub mod client;
pub mod ingress;
pub mod policy;
pub mod scan;

/// Error during collection of ingress data from a Kubernetes cluster.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Error originating from the Kubernetes API and/or the `kube` crate
    #[error("Kubernetes reported error: {0}")]
    KubeError(KubeError),
    /// No credential resolution strategy yielded a usable cluster configuration
    #[error("Failed to resolve Kubernetes credentials: {0}")]
    CredentialsError(String),
    /// An ingress resource lacks fields required to build a view of it
    #[error("Malformed ingress resource: {0}")]
    MalformedResource(String),
}

impl From<KubeError> for Error {
    fn from(kube_error: KubeError) -> Self {
        Error::KubeError(kube_error)
    }
}

impl From<ConfigError> for Error {
    fn from(config_error: ConfigError) -> Self {
        Error::CredentialsError(config_error.to_string())
    }
}
