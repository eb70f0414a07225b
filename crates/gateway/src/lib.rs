//! API Gateway Library
//!
//! The business tier: serves the HTTP lookup route and forwards each request
//! to the user service over gRPC.

pub mod clients;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::clients::UserClient;
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the gateway as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
    user_port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GatewayConfig::from_env();
    config.user_service.endpoint = local_endpoint(host, user_port);

    run(host, port, config).await
}

/// Endpoint URL for a service bound on `host:port` in this process group.
fn local_endpoint(host: &str, port: u16) -> String {
    // A wildcard bind address is not something a client can dial
    let host = match host {
        "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
        other => other,
    };
    format!("http://{}:{}", host, port)
}

/// Run the HTTP server with the given configuration.
pub async fn run(
    host: &str,
    port: u16,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create gRPC client
    let user_client = Arc::new(UserClient::connect_lazy(&config.user_service)?);
    info!("Forwarding lookups to {}", config.user_service.endpoint);

    // Create app state
    let state = AppState::new(user_client, config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
