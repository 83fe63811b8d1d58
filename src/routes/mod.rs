//! HTTP route handlers.
//!
//! Two fixed routes: the liveness probe at `/health` and the status page at
//! `/`. Any path not claimed by a route falls through to the status page, and
//! both routes answer every method.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with both routes, the fallback and response headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(home::index))
        .route("/health", any(health::health))
        // TODO: narrow to exact-match `/` once nothing relies on arbitrary paths rendering the page
        .fallback(home::index)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
