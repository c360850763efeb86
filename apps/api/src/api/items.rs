//! Items API routes

use axum::Router;
use domain_items::{ItemService, PgItemRepository, handlers};

use crate::state::AppState;

/// Create the items router backed by Postgres
pub fn router(state: &AppState) -> Router {
    let repository = PgItemRepository::new(state.db.clone());
    let service = ItemService::new(repository, state.config.uploads.clone());
    handlers::router(service)
}
