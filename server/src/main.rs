extern crate collector;
extern crate log;
extern crate simple_logger;

use std::sync::Arc;

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use tokio::net::TcpListener;

use collector::scan::{ClusterSource, IngressCollector};

use crate::api::AppState;
use crate::config::ServerConfig;

mod api;
mod config;

/// Entrypoint of the Kavorites web application. Presents the URLs of ingress resources
/// found across all namespaces of a Kubernetes cluster as a JSON API and a small
/// overview page.
///
/// Failing to resolve cluster credentials at startup is deliberately not fatal: the
/// HTTP surface still comes up, reports the condition on its health endpoint and
/// answers ingress requests with an error payload instead of crashing the process.
#[tokio::main]
async fn main() {
    init();
    let config: ServerConfig = ServerConfig::from_env();

    let ingress_collector: Option<Arc<IngressCollector<ClusterSource>>> =
        match collector::client::try_default().await {
            Ok(client) => Some(Arc::new(IngressCollector::new(
                ClusterSource::new(client),
                config.default_enabled,
            ))),
            Err(client_error) => {
                error!("Failed to initialize Kubernetes client: {}", client_error);
                None
            }
        };

    let state: AppState = AppState {
        collector: ingress_collector,
    };

    let address: String = format!("{}:{}", config.host, config.port);
    info!("Starting Kubernetes Ingress Viewer on {}", address);

    let listener: TcpListener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(bind_error) => {
            error!("Could not bind to {}: {}", address, bind_error);
            std::process::exit(1);
        }
    };
    if let Err(serve_error) = axum::serve(listener, api::router(state)).await {
        error!("Server terminated: {}", serve_error);
        std::process::exit(1);
    }
}

fn init() {
    SimpleLogger::new().with_level(LevelFilter::Info).init().unwrap();
}
