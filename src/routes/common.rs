//! Service probes and the API description: /health, /ready, /version, /openapi.json.

use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;

/// Probe payload. `database` is only reported by the readiness check.
#[derive(Serialize)]
struct ProbeStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<ProbeStatus> {
    Json(ProbeStatus {
        status: "ok",
        database: None,
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ProbeStatus>) {
    match state.books.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ProbeStatus {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeStatus {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes that never touch the store.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(build_info))
        .route("/openapi.json", get(openapi_json))
}

/// `common_routes` plus `/ready`, which pings the injected gateway.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(common_routes())
}
