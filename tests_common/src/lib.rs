// Module with common test resouces
use std::collections::BTreeMap;

use chrono::TimeZone;
use k8s_openapi::api::core::v1::{LoadBalancerIngress, LoadBalancerStatus};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, IngressStatus, IngressTLS, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};

/// Returns a bare ingress resource with only a name and an empty spec. Tests attach
/// rules, TLS entries and status to it as needed.
pub fn ingress(name: &str) -> Ingress {
    return Ingress {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..ObjectMeta::default()
        },
        spec: Some(IngressSpec::default()),
        ..Ingress::default()
    };
}

/// Returns an ingress rule for the given host and path entries. `None` paths produce
/// a rule without an HTTP block.
pub fn rule(host: Option<&str>, paths: Option<Vec<HTTPIngressPath>>) -> IngressRule {
    return IngressRule {
        host: host.map(|host| host.to_string()),
        http: paths.map(|paths| HTTPIngressRuleValue { paths }),
    };
}

/// Returns a path entry routing to the given backend service. A `None` service name
/// produces a path entry without a service backend; the port is attached only when a
/// service name is present, as the typed API nests it inside the service.
pub fn http_path(
    path: Option<&str>,
    service_name: Option<&str>,
    service_port: Option<i32>,
) -> HTTPIngressPath {
    let service: Option<IngressServiceBackend> = service_name.map(|name| IngressServiceBackend {
        name: name.to_string(),
        port: service_port.map(|number| ServiceBackendPort {
            number: Some(number),
            ..ServiceBackendPort::default()
        }),
    });
    return HTTPIngressPath {
        backend: IngressBackend {
            service,
            ..IngressBackend::default()
        },
        path: path.map(|path| path.to_string()),
        ..HTTPIngressPath::default()
    };
}

/// Returns a TLS entry covering the given hosts, or one without a host set.
pub fn tls(hosts: Option<Vec<&str>>) -> IngressTLS {
    return IngressTLS {
        hosts: hosts.map(|hosts| hosts.into_iter().map(String::from).collect()),
        ..IngressTLS::default()
    };
}

/// Returns an ingress status with a single assigned load balancer.
pub fn load_balancer_status() -> IngressStatus {
    return IngressStatus {
        load_balancer: Some(LoadBalancerStatus {
            ingress: Some(vec![LoadBalancerIngress {
                ip: Some("203.0.113.10".to_string()),
                ..LoadBalancerIngress::default()
            }]),
        }),
    };
}

/// Returns an ingress status whose load balancer carries no entries.
pub fn empty_load_balancer_status() -> IngressStatus {
    return IngressStatus {
        load_balancer: Some(LoadBalancerStatus {
            ingress: Some(Vec::new()),
        }),
    };
}

/// Returns a fixed creation timestamp, rendering as `2021-03-14T09:26:53+00:00`.
pub fn creation_time() -> Time {
    return Time(chrono::Utc.ymd(2021, 3, 14).and_hms(9, 26, 53));
}

/// Returns an annotation map built from the given key/value pairs.
pub fn annotations(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    return pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
}
