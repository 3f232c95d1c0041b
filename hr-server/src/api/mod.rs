//! HTTP API
//!
//! - [`health`] - liveness check
//! - [`employees`] - `/employee`
//! - [`activities`] - `/activity`
//! - [`tasks`] - `/task`

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod activities;
pub mod employees;
pub mod health;
pub mod tasks;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates a uuid v4 for every request without one
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(employees::router())
        .merge(activities::router())
        .merge(tasks::router())
}

/// Build the fully configured application: routes, middleware and state
///
/// Used by the HTTP server and by in-process `oneshot` calls in tests.
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Copy the request ID onto the response (inside SetRequestId)
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Trace - request spans (INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - outermost, so every layer below sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state.clone())
}
