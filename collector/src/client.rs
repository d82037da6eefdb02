use std::convert::TryFrom;

use kube::config::KubeConfigOptions;
use kube::{Client, Config};
use log::{debug, info};

use crate::Error;

/// Constructs a client from the in-cluster environment - the service account token
/// and API server address Kubernetes injects into every pod. Returns `Result::Err`
/// when the process is not running inside a Kubernetes cluster.
pub fn from_cluster_env() -> Result<Client, Error> {
    let config: Config = Config::from_cluster_env()?;
    return Result::Ok(Client::try_from(config)?);
}

/// Attempts to construct a `kube::Client` by searching for the `KUBECONFIG` environment
/// variable and possibly other well-known places. If no kubeconfig is found, returns
/// `Result::Err`.
///
/// # Examples
///
/// ```no_run
/// #[tokio::main]
/// async fn main() {
/// use kube::Client;
/// let client: Client = collector::client::from_kubeconfig().await
/// .expect("Could not construct client from kubeconfig.");
/// }
/// ```
pub async fn from_kubeconfig() -> Result<Client, Error> {
    let config: Config = Config::from_kubeconfig(&KubeConfigOptions::default()).await?;
    return Result::Ok(Client::try_from(config)?);
}

/// Resolves cluster credentials by walking an ordered list of strategies until one
/// succeeds: the in-cluster environment first, a local kubeconfig second. Returns
/// `Result::Err` with the last strategy's error when none of them yields a client.
///
/// # Examples
///
/// ```no_run
/// #[tokio::main]
/// async fn main() {
/// use kube::Client;
/// let client: Client = collector::client::try_default().await
/// .expect("Could not construct client.");
/// }
/// ```
pub async fn try_default() -> Result<Client, Error> {
    match from_cluster_env() {
        Ok(client) => {
            info!("Using in-cluster Kubernetes configuration");
            return Result::Ok(client);
        }
        Err(error) => {
            debug!("In-cluster configuration not available: {}", error);
        }
    }
    let client: Client = from_kubeconfig().await?;
    info!("Using local kubeconfig configuration");
    return Result::Ok(client);
}
