//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health checks, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: `AppError` and the structured `ErrorResponse` body
//! - **[`extractors`]**: `ObjectIdPath` for MongoDB id path segments, `LenientQuery` for query strings
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::{create_cors_layer, create_production_app, create_router, parse_allowed_origins};
//!
//! let cors = create_cors_layer(parse_allowed_origins("http://localhost:5173")?);
//! let router = create_router::<ApiDoc>(api_routes, cors);
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

pub use http::{create_cors_layer, parse_allowed_origins, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{LenientQuery, ObjectIdPath};
