//! Liveness and readiness endpoints

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "Server is running...";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// GET / - plain-text liveness message
async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /ready - 503 unless MongoDB answers a ping
async fn readiness_check(State(state): State<AppState>) -> Response {
    let client = state.mongo_client.clone();

    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async move {
            let status = database::mongodb::check_health_detailed(&client).await;
            tracing::debug!(
                healthy = status.healthy,
                response_time_ms = status.response_time_ms,
                "MongoDB ping"
            );
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
            }
        }),
    )];

    run_health_checks(checks).await
}
