use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::LoadBalancerIngress;
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, Ingress, IngressRule, IngressServiceBackend, IngressTLS,
};
use serde::Serialize;

use crate::Error;

/// Coarse readiness of an ingress, derived from its load-balancer status.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub enum IngressState {
    Ready,
    Pending,
}

/// A single resolvable URL extracted from one routing rule of an ingress.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub url: String,
    pub path: String,
    pub service_name: Option<String>,
    pub service_port: Option<i32>,
}

/// Flattened view of a single ingress resource, shaped for the JSON API.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct IngressView {
    pub name: String,
    pub namespace: String,
    pub creation_timestamp: Option<String>,
    pub urls: Vec<UrlRecord>,
    pub annotations: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
    pub status: IngressState,
}

/// Extracts one `UrlRecord` per host/path combination from the ingress rules, preserving
/// rule order. Rules without a host are skipped entirely. The protocol is `https` whenever
/// one of the ingress TLS entries lists the rule's host, `http` otherwise. A rule carrying
/// a host but no paths yields a single record pointing at the root path.
///
/// Never fails: an ingress with no spec, no rules, or only hostless rules yields an
/// empty list.
pub fn project_urls(ingress: &Ingress) -> Vec<UrlRecord> {
    let mut records: Vec<UrlRecord> = Vec::new();
    let rules: &Vec<IngressRule> = match ingress.spec.as_ref().and_then(|spec| spec.rules.as_ref()) {
        Some(rules) => rules,
        None => return records,
    };

    for rule in rules {
        let host: &str = match rule.host.as_deref() {
            Some(host) if !host.is_empty() => host,
            _ => continue,
        };
        let protocol: &str = if has_tls(ingress, host) { "https" } else { "http" };
        let base_url: String = format!("{}://{}", protocol, host);

        match rule.http.as_ref().map(|http| &http.paths) {
            Some(paths) if !paths.is_empty() => {
                for path in paths {
                    records.push(record_for_path(&base_url, path));
                }
            }
            _ => {
                // A hosted rule with no explicit paths still serves the root path.
                records.push(UrlRecord {
                    url: format!("{}/", base_url),
                    path: "/".to_string(),
                    service_name: None,
                    service_port: None,
                });
            }
        }
    }
    return records;
}

/// Builds one record for a single path entry. An absent or empty path string resolves
/// to `/`. Backend service name and port are each independently optional.
fn record_for_path(base_url: &str, path: &HTTPIngressPath) -> UrlRecord {
    let path_value: String = match path.path.as_deref() {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => "/".to_string(),
    };
    let service: Option<&IngressServiceBackend> = path.backend.service.as_ref();
    let service_name: Option<String> = service.map(|service| service.name.clone());
    let service_port: Option<i32> = service
        .and_then(|service| service.port.as_ref())
        .and_then(|port| port.number);

    return UrlRecord {
        url: format!("{}{}", base_url, path_value),
        path: path_value,
        service_name,
        service_port,
    };
}

/// Checks if the ingress has TLS configuration covering the given host. Host comparison
/// is exact and case-sensitive.
fn has_tls(ingress: &Ingress, host: &str) -> bool {
    let tls_entries: &Vec<IngressTLS> = match ingress.spec.as_ref().and_then(|spec| spec.tls.as_ref()) {
        Some(tls_entries) => tls_entries,
        None => return false,
    };
    for tls in tls_entries {
        if let Some(hosts) = tls.hosts.as_ref() {
            if hosts.iter().any(|tls_host| tls_host == host) {
                return true;
            }
        }
    }
    return false;
}

/// Returns the first load-balancer ingress entry assigned to an Ingress, if found.
/// Otherwise returns None.
fn any_load_balancer_ingress(ingress: &Ingress) -> Option<&LoadBalancerIngress> {
    return ingress.status.as_ref()?
        .load_balancer.as_ref()?
        .ingress.as_ref()?
        .first();
}

/// Derives the readiness of an ingress: `Ready` as soon as at least one load balancer
/// has been assigned to it, `Pending` otherwise - including when the resource carries
/// no status at all.
pub fn classify(ingress: &Ingress) -> IngressState {
    return match any_load_balancer_ingress(ingress) {
        Some(_) => IngressState::Ready,
        None => IngressState::Pending,
    };
}

/// Builds the serializable view of a single ingress resource: metadata, projected URLs
/// and readiness state. Absent annotation/label maps become empty maps; the creation
/// timestamp is rendered as RFC 3339.
///
/// Returns `Error::MalformedResource` for a resource carrying no name - the only field
/// of the typed resource the view cannot do without.
///
/// # Arguments
/// `ingress` - The raw ingress resource as returned by the Kubernetes API.
/// `namespace` - Namespace the resource was listed from.
pub fn parse_ingress(ingress: &Ingress, namespace: &str) -> Result<IngressView, Error> {
    let name: String = match ingress.metadata.name.as_ref() {
        Some(name) => name.clone(),
        None => {
            return Result::Err(Error::MalformedResource(
                "resource carries no name".to_string(),
            ));
        }
    };
    let creation_timestamp: Option<String> = ingress
        .metadata
        .creation_timestamp
        .as_ref()
        .map(|timestamp| timestamp.0.to_rfc3339());

    return Result::Ok(IngressView {
        name,
        namespace: namespace.to_string(),
        creation_timestamp,
        urls: project_urls(ingress),
        annotations: ingress.metadata.annotations.clone().unwrap_or_default(),
        labels: ingress.metadata.labels.clone().unwrap_or_default(),
        status: classify(ingress),
    });
}
