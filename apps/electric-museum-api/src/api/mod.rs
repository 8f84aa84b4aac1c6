//! API routes module
//!
//! This module wires the domain routers into one router served at the root.

pub mod health;
pub mod products;
pub mod users;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(products::router(state))
        .merge(users::router(state))
        .merge(health::router(state.clone()))
        .merge(health_router(state.config.app))
}
