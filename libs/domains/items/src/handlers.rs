use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::errors::responses::InternalServerErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::ItemResponse;
use crate::repository::ItemRepository;
use crate::service::ItemService;

const TAG: &str = "items";

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items),
    components(
        schemas(ItemResponse),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Collectable item catalog")
    )
)]
pub struct ApiDoc;

/// Create the items router
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    Router::new()
        .route("/", get(list_items))
        .with_state(Arc::new(service))
}

/// List the collectable item catalog
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of collectable items", body = Vec<ItemResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<ItemResponse>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryItemRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::uploads::UploadsConfig;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let repository = InMemoryItemRepository::with_default_catalog();
        let uploads = UploadsConfig::new("uploads", "http://localhost:8080/uploads");
        router(ItemService::new(repository, uploads))
    }

    #[tokio::test]
    async fn test_list_items_returns_catalog() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let items: Vec<ItemResponse> = serde_json::from_slice(&body).unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].title, "Lâmpadas");
        assert_eq!(
            items[0].image_url,
            "http://localhost:8080/uploads/lampadas.svg"
        );
    }
}
