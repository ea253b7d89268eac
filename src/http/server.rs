//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router and middleware stack
//! - Dispatch every page request into the shared route resolver
//! - Run the matched route's fetch and render the document shell
//! - Serve the cached client bundle
//! - Graceful shutdown on ctrl-c

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::NavState;
use crate::config::AppConfig;
use crate::http::bundle::BundleCache;
use crate::http::document;
use crate::observability::metrics;
use crate::routing::resolve;
use crate::store::{MemoryStore, StoreError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub bundle: Arc<BundleCache>,
}

/// HTTP server for the blog.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: AppConfig, store: Arc<MemoryStore>) -> Self {
        let state = AppState {
            store,
            bundle: Arc::new(BundleCache::new(config.bundle.path.clone())),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/bundle.js", get(bundle_handler))
            .route("/", any(page_handler))
            .route("/{*path}", any(page_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
            // Later layers wrap earlier ones: the id is set outermost,
            // propagated onto the response just inside it.
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main page handler: resolve, fetch, render the document shell.
///
/// The same resolver and views run in the client runtime; only the
/// document shell and status mapping are server-specific.
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();

    let Some(route) = resolve(path) else {
        tracing::warn!(path = %path, "no route matched");
        metrics::record_page("none", 404);
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    let route_key = route.key;
    tracing::debug!(path = %path, route = ?route_key, "rendering page");

    let data = match route.fetch(state.store.as_ref()).await {
        Ok(data) => data,
        Err(err) => {
            let status = match err {
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::warn!(path = %path, error = %err, "fetch failed");
            metrics::record_page(route_key.as_str(), status.as_u16());
            return (status, err.to_string()).into_response();
        }
    };

    let nav_state = NavState { route_key, data };
    match document::render_page(&nav_state) {
        Ok(html) => {
            metrics::record_page(route_key.as_str(), 200);
            Html(html).into_response()
        }
        Err(err) => {
            tracing::error!(path = %path, error = %err, "page render failed");
            metrics::record_page(route_key.as_str(), 500);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// Serve the cached client bundle.
async fn bundle_handler(State(state): State<AppState>) -> Response {
    match state.bundle.get().await {
        Ok(bytes) => (
            [(axum::http::header::CONTENT_TYPE, "text/javascript")],
            bytes.to_vec(),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "bundle unavailable");
            (StatusCode::INTERNAL_SERVER_ERROR, "bundle unavailable").into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Returning would shut the server down immediately; park instead.
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
