//! Points API routes

use axum::Router;
use domain_points::{PgPointRepository, PointService, handlers};

use crate::state::AppState;

/// Create the points router backed by Postgres
pub fn router(state: &AppState) -> Router {
    let repository = PgPointRepository::new(state.db.clone());
    let service = PointService::new(repository, state.config.uploads.clone());
    handlers::router(service)
}
