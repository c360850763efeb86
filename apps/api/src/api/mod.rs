//! API routes module

pub mod health;
pub mod items;
pub mod points;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create all API routes
///
/// Domain routers live at the top level (`/items`, `/points`); uploaded
/// point photos and catalog icons are served statically under `/uploads`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .nest("/points", points::router(state))
        .nest_service(
            "/uploads",
            ServeDir::new(&state.config.uploads.dir),
        )
}

pub use health::ready_router;
