//! CORS layer construction.

use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Create a permissive CORS layer: any origin, method, and header.
///
/// The registration and discovery endpoints are consumed by web and mobile
/// clients from arbitrary origins, and no credentialed requests are involved,
/// so the permissive policy matches the upstream service's behavior.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_permissive_cors_allows_any_origin() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_permissive_cors_layer());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", "http://anywhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .unwrap();
        assert_eq!(allow_origin, "*");
    }
}
