//! Gateway service: HTTP binding of the reorder handler.
//!
//! Routes:
//! - `POST|PUT|PATCH /sortable-posts/update`: reorder
//! - `GET /health`: liveness
//! - `GET /metrics`: Prometheus text format

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::auth::{resolve_principal, AuthConfig};
use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use sp_01_reorder::domain::sanitize::sanitize_key;
use sp_01_reorder::{KeyValueStore, ObjectType, ReorderHandler, ReorderPayload, RestResponse};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Path of the update route
pub const UPDATE_ROUTE: &str = "/sortable-posts/update";

/// API Gateway service
pub struct ApiGatewayService {
    config: GatewayConfig,
    handler: ReorderHandler,
}

impl ApiGatewayService {
    /// Create a new gateway over `kv`
    pub fn new(config: GatewayConfig, kv: Arc<dyn KeyValueStore>) -> Result<Self, GatewayError> {
        config.validate()?;

        let handler = ReorderHandler::with_store(kv, config.reorder.clone());

        Ok(Self { config, handler })
    }

    /// Router with all routes and layers applied
    pub fn router(&self) -> Router {
        let auth = AuthConfig {
            api_key: self.config.api_key.clone(),
            capability: self.handler.required_capability().to_string(),
        };
        build_router(self.handler.clone(), auth, self.config.max_body_bytes)
    }

    /// Serve until Ctrl+C
    pub async fn start(self) -> Result<(), GatewayError> {
        self.serve_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl+C");
            }
        })
        .await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn serve_until<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{}: {}", addr, e)))?;

        info!(addr = %addr, "Starting HTTP server");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| GatewayError::Serve(e.to_string()))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    handler: ReorderHandler,
    auth: Arc<AuthConfig>,
}

/// Build the HTTP router
pub fn build_router(handler: ReorderHandler, auth: AuthConfig, max_body_bytes: usize) -> Router {
    let state = AppState {
        handler,
        auth: Arc::new(auth),
    };

    Router::new()
        .route(
            UPDATE_ROUTE,
            post(handle_update).put(handle_update).patch(handle_update),
        )
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle a reorder update
async fn handle_update(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("reorder_update", %request_id);

    async move {
        let started = Instant::now();
        let principal = resolve_principal(&headers, &state.auth);

        let payload = match parse_payload(&body) {
            Ok(payload) => payload,
            Err(e) if principal.can(state.handler.required_capability()) => {
                warn!(error = %e, "Rejected malformed JSON body");
                let response = RestResponse::invalid_json(e);
                sp_telemetry::record_reorder("unknown", &response.body.code, 0, started.elapsed());
                return into_http(response, request_id);
            }
            // The handler rejects the caller before it would read the payload
            Err(_) => ReorderPayload::default(),
        };

        let object_type = object_type_label(&payload);
        let response = state.handler.handle_update(&principal, payload).await;

        sp_telemetry::record_reorder(
            object_type,
            &response.body.code,
            response.affected,
            started.elapsed(),
        );

        into_http(response, request_id)
    }
    .instrument(span)
    .await
}

/// Parse the request body.
///
/// An empty body or a JSON value that is not an object carries no fields.
fn parse_payload(body: &str) -> Result<ReorderPayload, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(ReorderPayload::default());
    }

    match serde_json::from_str::<Value>(body)? {
        Value::Object(mut fields) => Ok(ReorderPayload {
            order: fields.remove("order"),
            start: fields.remove("start"),
            object_type: fields.remove("object_type"),
        }),
        _ => Ok(ReorderPayload::default()),
    }
}

/// Bounded metric label for the submitted object type
fn object_type_label(payload: &ReorderPayload) -> &'static str {
    payload
        .object_type
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|raw| sanitize_key(raw).parse::<ObjectType>().ok())
        .map(|object_type| object_type.as_str())
        .unwrap_or("unknown")
}

fn into_http(response: RestResponse, request_id: Uuid) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut http = (status, Json(response.body)).into_response();
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        http.headers_mut().insert("x-request-id", value);
    }
    http
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "sp-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Prometheus scrape endpoint
async fn metrics() -> Response {
    match sp_telemetry::encode_metrics() {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
