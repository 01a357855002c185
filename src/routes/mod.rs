//! Router assembly.

mod common;
mod registry;

pub use common::common_routes;
pub use registry::registry_routes;

use crate::openapi::openapi_document;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// Full application: common routes, entity routes and `/openapi.json`, with a request body cap.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(registry_routes(state))
        .route("/openapi.json", get(|| async { Json(openapi_document()) }))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(body_limit_bytes)))
}
