//! Readiness endpoint
//!
//! Liveness (`/health`) comes from `axum_helpers::health_router`; readiness
//! additionally verifies the database connection.

use axum::{Json, Router, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

async fn ready(state: AppState) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}

pub fn ready_router(state: AppState) -> Router {
    Router::new().route("/ready", get(move || ready(state)))
}
