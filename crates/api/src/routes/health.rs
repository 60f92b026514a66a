//! Liveness endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Currency amounts are reported in.
    pub currency: String,
}

/// GET `/health` - Reports liveness without touching the gym stores.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        currency: state.currency.to_string(),
    })
}

/// Creates the public liveness route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
