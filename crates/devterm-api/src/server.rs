//! HTTP API Server
//!
//! Starts and manages the axum-based HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::info;

use devterm_core::{Config, ToolRegistry};

use crate::error::{ApiError, Result};
use crate::routes::routes;

/// Shared application state
///
/// The registry is immutable after startup, so handlers share it without
/// any coordination.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
}

/// Start the HTTP API server
pub async fn start_server(config: &Config, registry: ToolRegistry) -> Result<()> {
    let state = AppState {
        registry: Arc::new(registry),
    };

    let app = routes().layer(CorsLayer::permissive()).with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.api.host, config.api.port)
        .parse()
        .map_err(|e| ApiError::BindAddress(format!("{}", e)))?;
    info!("DevTerm Web listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devterm_tools::register_default_tools;

    #[test]
    fn test_router_builds_with_default_tools() {
        let mut registry = ToolRegistry::new();
        register_default_tools(&mut registry, &Config::default());
        let state = AppState {
            registry: Arc::new(registry),
        };
        let _app: axum::Router = routes().with_state(state);
    }

    #[tokio::test]
    async fn test_invalid_bind_address_is_reported() {
        let mut config = Config::default();
        config.api.host = "not a host".to_string();
        let err = start_server(&config, ToolRegistry::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::BindAddress(_)));
    }
}
