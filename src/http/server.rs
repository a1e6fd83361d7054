//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with both API routes
//! - Wire up middleware (tracing, timeout, request ID, CORS)
//! - Bind server to listener and drain gracefully on shutdown
//! - Forward prediction requests to the upstream client
//! - Translate upstream failures into the uniform error shape

use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::http::response::{self, MessageBody, WELCOME_MESSAGE};
use crate::lifecycle::signals;
use crate::upstream::{PredictionClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub predictions: PredictionClient,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, UpstreamError> {
        let predictions = PredictionClient::new(&config)?;
        let state = AppState { predictions };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The CORS policy admits every origin, method, and header with
    /// credentials (mirrored origin). Intended for local and trusted
    /// deployments only.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/predictions/traffic", get(traffic_predictions))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::very_permissive())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Drains in-flight requests when either an OS signal arrives or the
    /// shutdown coordinator fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_requested(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Handler for the API root.
async fn root() -> Json<MessageBody> {
    tracing::info!("Root endpoint hit");
    Json(MessageBody {
        message: WELCOME_MESSAGE,
    })
}

/// Query parameters of the traffic predictions route.
///
/// `days_ahead` is coerced to an integer by the extractor; a malformed
/// value is rejected with 400 before the handler runs. Range is not
/// checked here.
#[derive(Debug, Deserialize)]
struct TrafficParams {
    #[serde(default = "default_days_ahead")]
    days_ahead: i64,
}

fn default_days_ahead() -> i64 {
    7
}

/// Proxy handler for traffic predictions.
///
/// One outbound call per inbound request; the upstream JSON body is
/// relayed verbatim on success.
async fn traffic_predictions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<TrafficParams>,
) -> Response {
    let request_id = headers.request_id();

    tracing::debug!(
        request_id = %request_id,
        days_ahead = params.days_ahead,
        "Proxying prediction request"
    );

    match state.predictions.traffic(params.days_ahead, request_id).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => {
            tracing::warn!(
                request_id = %request_id,
                error = %err,
                "Upstream request failed"
            );
            response::upstream_error_response(&err)
        }
    }
}

/// Wait for a shutdown signal (OS signal or coordinator trigger).
async fn shutdown_requested(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = signals::shutdown_signal() => {}
        _ = shutdown.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}
