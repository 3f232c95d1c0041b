//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | service and database status |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    service: &'static str,
    version: &'static str,
    environment: String,
    /// ok | unavailable
    database: &'static str,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db_ok = state.db.ping().await;
    if !db_ok {
        tracing::warn!("Health check: database unavailable");
    }

    Json(HealthResponse {
        status: if db_ok { "ok" } else { "degraded" },
        service: "hr-server",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        database: if db_ok { "ok" } else { "unavailable" },
    })
}
