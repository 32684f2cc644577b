//! Router construction and server startup

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handler::{generate_handler, health_handler};
use crate::config::AppConfig;
use crate::upstream::GeminiClient;

/// Shared state for the proxy
///
/// Read-only after startup; requests share it through `Arc` and need no
/// further coordination.
#[derive(Clone)]
pub struct ProxyState {
    pub config: Arc<AppConfig>,
    pub client: Arc<GeminiClient>,
}

/// Build the application router
///
/// API routes first; everything else falls through to the static file
/// service so GET / serves the frontend document.
pub fn build_router(state: ProxyState) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/health", get(health_handler))
        .fallback_service(static_files)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until shutdown
pub async fn run_server(
    config: AppConfig,
    client: GeminiClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let upstream = config.upstream.base_url().to_string();

    let state = ProxyState {
        config: Arc::new(config),
        client: Arc::new(client),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("gemini-proxy listening on {}", addr);
    tracing::info!("Proxying prompts to {}", upstream);

    Ok(axum::serve(listener, app).await?)
}
