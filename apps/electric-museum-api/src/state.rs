//! Application state management.
//!
//! This module defines the shared application state used to build the routers.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap: the MongoDB client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, also used by the readiness probe
    pub mongo_client: Client,
    /// Database holding `users` and `products`
    pub db: Database,
}
