//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for the finance summary and salary view
//! - Authentication middleware
//! - Error responses mapped from domain errors

pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use gymledger_core::finance::FinanceService;
use gymledger_shared::JwtService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Finance read models.
    pub finance: Arc<FinanceService>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// ISO 4217 code reported with every amount.
    pub currency: Arc<str>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
