//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the demo handlers
//! - Wire up middleware (request ID, timeout, body limit, log interceptors)
//! - Bind server to listener
//! - Graceful shutdown via the lifecycle coordinator

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::middleware::{RequestIdLayer, RequestLogLayer, ResponseLogLayer};

/// HTTP server hosting the demo surface behind the logging interceptors.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers added later wrap the ones added earlier: the request ID is
    /// assigned outermost so both log interceptors see it, and the body
    /// limit sits innermost because it changes the request body type the
    /// interceptors expect.
    fn build_router(config: &AppConfig) -> Router {
        Router::new()
            .route(
                "/api/values",
                get(handlers::get_values).post(handlers::post_values),
            )
            .route("/api/echo", post(handlers::echo))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(ResponseLogLayer::new(config.access_log.response_body_limit))
            .layer(RequestLogLayer::new())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
