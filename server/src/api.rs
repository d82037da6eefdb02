use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use log::error;
use serde::Serialize;

use collector::ingress::IngressView;
use collector::scan::{ClusterSource, IngressCollector};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared state injected into all handlers. The collector is absent when no cluster
/// credentials could be resolved at startup; the server then keeps serving and reports
/// the condition through `/api/health` while `/api/ingresses` requests fail.
#[derive(Clone)]
pub struct AppState {
    pub collector: Option<Arc<IngressCollector<ClusterSource>>>,
}

#[derive(Serialize)]
struct IngressListResponse {
    ingresses: Vec<IngressView>,
    count: usize,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    k8s_client_available: bool,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    return Router::new()
        .route("/", get(index))
        .route("/api/ingresses", get(list_ingresses))
        .route("/api/health", get(health))
        .with_state(state);
}

/// GET / - overview page.
async fn index() -> Html<&'static str> {
    return Html(INDEX_HTML);
}

/// GET /api/ingresses - scan the cluster and return all enabled ingress views.
async fn list_ingresses(State(state): State<AppState>) -> impl IntoResponse {
    let ingress_collector = match state.collector.as_ref() {
        Some(ingress_collector) => ingress_collector,
        None => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Kubernetes client not available".to_string(),
                }),
            )
                .into_response();
        }
    };
    match ingress_collector.scan().await {
        Ok(ingresses) => {
            let count: usize = ingresses.len();
            (StatusCode::OK, Json(IngressListResponse { ingresses, count })).into_response()
        }
        Err(scan_error) => {
            error!("Error retrieving ingresses: {}", scan_error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: scan_error.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /api/health - always succeeds, also reports whether a cluster client exists.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response: HealthResponse = HealthResponse {
        status: "healthy".to_string(),
        k8s_client_available: state.collector.is_some(),
    };
    return (StatusCode::OK, Json(response)).into_response();
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ErrorResponse, HealthResponse, IngressListResponse};

    #[test]
    fn test_health_response_shape() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            k8s_client_available: false,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "healthy", "k8s_client_available": false})
        );
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse {
            error: "Kubernetes client not available".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"error": "Kubernetes client not available"})
        );
    }

    #[test]
    fn test_ingress_list_response_shape() {
        let response = IngressListResponse {
            ingresses: Vec::new(),
            count: 0,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"ingresses": [], "count": 0})
        );
    }
}
