use async_trait::async_trait;
use futures::future::join_all;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::api::networking::v1::Ingress;
use kube::api::ListParams;
use kube::{Api, Client};
use log::warn;

use crate::ingress::{parse_ingress, IngressView};
use crate::policy::is_enabled;
use crate::Error;

/// Capability interface over the cluster: everything the collector needs to know about
/// the outside world. Retry, backoff and connection management are the implementor's
/// concern; keeping the scan behind this trait makes it coverable without a cluster.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Lists the names of all namespaces in the cluster.
    async fn list_namespaces(&self) -> Result<Vec<String>, Error>;

    /// Lists all ingress resources in the given namespace.
    async fn list_ingresses(&self, namespace: &str) -> Result<Vec<Ingress>, Error>;
}

/// Live data source backed by the Kubernetes API.
pub struct ClusterSource {
    client: Client,
}

impl ClusterSource {
    /// # Arguments
    /// `client` - A Kubernetes client from the `kube` crate to list resources with. Read
    /// permissions on namespaces and ingresses cluster-wide are the caller's responsibility.
    pub fn new(client: Client) -> Self {
        ClusterSource { client }
    }
}

#[async_trait]
impl DataSource for ClusterSource {
    async fn list_namespaces(&self) -> Result<Vec<String>, Error> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let namespaces = api.list(&ListParams::default()).await?;
        let names: Vec<String> = namespaces
            .items
            .into_iter()
            .filter_map(|namespace| namespace.metadata.name)
            .collect();
        return Result::Ok(names);
    }

    async fn list_ingresses(&self, namespace: &str) -> Result<Vec<Ingress>, Error> {
        let api: Api<Ingress> = Api::namespaced(self.client.clone(), namespace);
        let ingresses = api.list(&ListParams::default()).await?;
        return Result::Ok(ingresses.items);
    }
}

/// Scans the cluster for ingress resources and turns them into `IngressView`s, filtered
/// by the enabled annotation. Holds no state across scans beyond the data source handle
/// and the immutable default-enabled setting, both fixed at construction.
pub struct IngressCollector<S: DataSource> {
    source: S,
    default_enabled: bool,
}

impl<S: DataSource> IngressCollector<S> {
    /// # Arguments
    /// `source` - Data source to pull namespace and ingress listings from.
    /// `default_enabled` - Whether ingresses without the enabled annotation are included.
    pub fn new(source: S, default_enabled: bool) -> Self {
        IngressCollector {
            source,
            default_enabled,
        }
    }

    /// Retrieves all ingress resources from the cluster, filtered by the enabled
    /// annotation and the default setting.
    ///
    /// The namespace listing itself must succeed; its failure fails the whole scan.
    /// Per-namespace ingress listings run concurrently, and a namespace whose listing
    /// fails is logged and skipped without cancelling the others. An ingress resource
    /// that cannot be turned into a view is likewise logged and skipped on its own.
    ///
    /// Result order follows the namespace enumeration order of the data source, then
    /// the ingress listing order within each namespace.
    pub async fn scan(&self) -> Result<Vec<IngressView>, Error> {
        let namespaces: Vec<String> = self.source.list_namespaces().await?;
        let fetches = namespaces
            .iter()
            .map(|namespace| self.source.list_ingresses(namespace));
        let listings: Vec<Result<Vec<Ingress>, Error>> = join_all(fetches).await;

        let mut views: Vec<IngressView> = Vec::new();
        for (namespace, listing) in namespaces.iter().zip(listings) {
            let ingresses: Vec<Ingress> = match listing {
                Ok(ingresses) => ingresses,
                Err(error) => {
                    warn!(
                        "Could not retrieve ingresses from namespace {}: {}",
                        namespace, error
                    );
                    continue;
                }
            };
            for ingress in &ingresses {
                let view: IngressView = match parse_ingress(ingress, namespace) {
                    Ok(view) => view,
                    Err(error) => {
                        warn!("Skipping ingress in namespace {}: {}", namespace, error);
                        continue;
                    }
                };
                if is_enabled(&view.annotations, self.default_enabled) {
                    views.push(view);
                }
            }
        }
        return Result::Ok(views);
    }
}
