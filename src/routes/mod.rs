//! Router assembly.

mod books;
mod common;

pub use books::book_routes;
pub use common::{common_routes, common_routes_with_ready};

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router: probes plus the books resource, with request tracing
/// and a body size limit. axum's own 2 MiB extractor cap is disabled so the
/// tower-http layer is the only limit in force.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(book_routes(state))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
