//! Router assembly: memo and common routes behind CORS, body-limit and trace layers.

mod common;
mod memo;
pub use common::common_routes_with_ready;
pub use memo::memo_routes;

use crate::state::AppState;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Credentialed CORS for exactly one origin; methods and headers are mirrored from the preflight.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn app(state: AppState, cors_origin: HeaderValue) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(memo_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
}
