use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PointResult;
use crate::models::{CreatePoint, PointDetailResponse, PointFilter, PointResponse};
use crate::repository::PointRepository;
use crate::service::PointService;

const TAG: &str = "points";

/// OpenAPI documentation for the Points API
#[derive(OpenApi)]
#[openapi(
    paths(list_points, create_point, get_point),
    components(
        schemas(CreatePoint, PointFilter, PointResponse, PointDetailResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Waste-collection point registration and lookup")
    )
)]
pub struct ApiDoc;

/// Create the points router
pub fn router<R: PointRepository + 'static>(service: PointService<R>) -> Router {
    Router::new()
        .route("/", get(list_points).post(create_point))
        .route("/{id}", get(get_point))
        .with_state(Arc::new(service))
}

/// List collection points with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PointFilter),
    responses(
        (status = 200, description = "List of collection points", body = Vec<PointResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_points<R: PointRepository>(
    State(service): State<Arc<PointService<R>>>,
    Query(filter): Query<PointFilter>,
) -> PointResult<Json<Vec<PointResponse>>> {
    let points = service.list_points(filter).await?;
    Ok(Json(points))
}

/// Register a new collection point
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreatePoint,
    responses(
        (status = 201, description = "Point created successfully", body = PointDetailResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_point<R: PointRepository>(
    State(service): State<Arc<PointService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePoint>,
) -> PointResult<impl IntoResponse> {
    let detail = service.create_point(input).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// Get a collection point with its items
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Point ID")
    ),
    responses(
        (status = 200, description = "Point found", body = PointDetailResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_point<R: PointRepository>(
    State(service): State<Arc<PointService<R>>>,
    UuidPath(id): UuidPath,
) -> PointResult<Json<PointDetailResponse>> {
    let detail = service.get_point(id).await?;
    Ok(Json(detail))
}
