//! Handler tests for the Points domain
//!
//! These tests run the real Postgres repository against a testcontainers
//! database, exercising the full path from HTTP request to committed rows:
//! - Request deserialization and validation
//! - Transactional point + association insert
//! - Filtered lookups and response shaping
//! - HTTP status codes and error responses

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use core_config::uploads::UploadsConfig;
use domain_points::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt; // For oneshot()

fn app(db: &TestDatabase) -> Router {
    let repo = PgPointRepository::new(db.connection());
    let uploads = UploadsConfig::new("uploads", "http://localhost:8080/uploads");
    let service = PointService::new(repo, uploads);
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn create_body(builder: &TestDataBuilder, city: &str, uf: &str, items: Value) -> Value {
    json!({
        "name": builder.name("point", city),
        "email": builder.email(city),
        "whatsapp": "+5511999990000",
        "latitude": -23.55,
        "longitude": -46.63,
        "city": city,
        "uf": uf,
        "items": items
    })
}

#[tokio::test]
async fn test_create_point_handler_returns_201_with_items() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let body = create_body(&builder, "São Paulo", "SP", json!([1, 2]));
    let response = app.oneshot(post_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let detail = json_body(response.into_body()).await;
    assert_eq!(detail["point"]["city"], "São Paulo");
    assert_eq!(detail["point"]["uf"], "SP");

    let items = detail["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Lâmpadas");
    assert_eq!(
        items[0]["image_url"],
        "http://localhost:8080/uploads/lampadas.svg"
    );
}

#[tokio::test]
async fn test_create_point_handler_validates_input() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_validate");

    // Empty item list is rejected before any row is written
    let body = create_body(&builder, "São Paulo", "SP", json!([]));
    let response = app.clone().oneshot(post_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Malformed email
    let mut body = create_body(&builder, "São Paulo", "SP", json!([1]));
    body["email"] = json!("not-an-email");
    let response = app.oneshot(post_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_point_handler_rejects_unknown_items() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_unknown_items");

    let body = create_body(&builder, "São Paulo", "SP", json!([1, 99]));
    let response = app.oneshot(post_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = json_body(response.into_body()).await;
    assert!(error["message"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_get_point_handler_round_trip() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_round_trip");

    let body = create_body(&builder, "Curitiba", "PR", json!([4, 6]));
    let response = app.clone().oneshot(post_request(&body)).await.unwrap();
    let created = json_body(response.into_body()).await;
    let id = created["point"]["id"].as_str().unwrap().to_string();

    let response = app.oneshot(get_request(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let detail = json_body(response.into_body()).await;
    assert_eq!(detail["point"]["id"], id.as_str());
    assert_eq!(detail["point"]["city"], "Curitiba");

    let titles: Vec<&str> = detail["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Resíduos Eletrônicos", "Óleo de Cozinha"]);
}

#[tokio::test]
async fn test_get_point_handler_returns_404_for_missing() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .oneshot(get_request(&format!("/{}", uuid::Uuid::now_v7())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_point_handler_returns_400_for_malformed_id() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app.oneshot(get_request("/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_points_handler_filters() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_list_filters");

    let sp = create_body(&builder, "São Paulo", "SP", json!([1, 2]));
    let rj = create_body(&builder, "Niterói", "RJ", json!([6]));

    for body in [&sp, &rj] {
        let response = app.clone().oneshot(post_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // No filters: everything comes back
    let response = app.clone().oneshot(get_request("/")).await.unwrap();
    let all = json_body(response.into_body()).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    // Filter by uf
    let response = app.clone().oneshot(get_request("/?uf=RJ")).await.unwrap();
    let by_uf = json_body(response.into_body()).await;
    assert_eq!(by_uf.as_array().unwrap().len(), 1);
    assert_eq!(by_uf[0]["city"], "Niterói");

    // Filter by city
    let response = app
        .clone()
        .oneshot(get_request("/?city=S%C3%A3o%20Paulo&uf=SP"))
        .await
        .unwrap();
    let by_city = json_body(response.into_body()).await;
    assert_eq!(by_city.as_array().unwrap().len(), 1);
    assert_eq!(by_city[0]["uf"], "SP");

    // Filter by items: any overlapping association matches
    let response = app
        .clone()
        .oneshot(get_request("/?items=2,6"))
        .await
        .unwrap();
    let by_items = json_body(response.into_body()).await;
    assert_eq!(by_items.as_array().unwrap().len(), 2);

    let response = app.clone().oneshot(get_request("/?items=6")).await.unwrap();
    let by_single_item = json_body(response.into_body()).await;
    assert_eq!(by_single_item.as_array().unwrap().len(), 1);
    assert_eq!(by_single_item[0]["city"], "Niterói");

    // Bad item id in the CSV is a validation error
    let response = app.oneshot(get_request("/?items=1,abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_point_with_multiple_matching_items_lists_once() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_distinct");

    let body = create_body(&builder, "Salvador", "BA", json!([1, 2, 3]));
    let response = app.clone().oneshot(post_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Point matches several requested items but appears once
    let response = app.oneshot(get_request("/?items=1,2,3")).await.unwrap();
    let points = json_body(response.into_body()).await;
    assert_eq!(points.as_array().unwrap().len(), 1);
}
