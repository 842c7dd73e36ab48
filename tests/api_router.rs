//! Router tests for request paths that are rejected before reaching the database

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use book_catalog::{api, config::AppConfig, repository::Repository, services::Services, AppState};

/// Router backed by a pool that never connects unless a query runs
fn test_router() -> Router {
    let config = AppConfig::default();
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&config.database.url)
        .expect("lazy pool");
    let services = Services::new(Repository::new(pool));

    api::router(AppState {
        services: Arc::new(services),
    })
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_router().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (status, body) = send(json_request("POST", "/authors", "{\"firstName\": ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Malformed JSON request");
}

#[tokio::test]
async fn test_unparseable_date_is_malformed() {
    let payload = r#"{"firstName":"John","lastName":"Doe","debutDate":"01/02/2000"}"#;
    let (status, body) = send(json_request("POST", "/authors", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Malformed JSON request");
}

#[tokio::test]
async fn test_missing_content_type_is_malformed() {
    let request = Request::post("/categories")
        .body(Body::from(r#"{"name":"Novel"}"#))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Malformed JSON request");
}

#[tokio::test]
async fn test_first_invalid_field_is_reported() {
    let payload = r#"{"lastName":"  ","debutDate":"2000-01-01"}"#;
    let (status, body) = send(json_request("POST", "/authors", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "firstName is required and cannot be blank");
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    let payload = r#"{"name":"1984","isbn":"978-0451524935","noPages":328,"price":-1,
        "language":"English","publishDate":"1949-06-08"}"#;
    let (status, body) = send(json_request("POST", "/books", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "price cannot be less than 0");
}

#[tokio::test]
async fn test_blank_update_field_is_rejected() {
    let (status, body) = send(json_request("PUT", "/categories/1", r#"{"name":""}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required and cannot be blank");
}

#[tokio::test]
async fn test_link_requires_all_ids() {
    let payload = r#"{"bookId":1,"editorId":3}"#;
    let (status, body) = send(json_request("POST", "/book_author_editors", payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "authorId is required");
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let request = Request::get("/books/abc").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid path parameter");
}

#[tokio::test]
async fn test_non_numeric_composite_key_is_rejected() {
    let request = Request::delete("/book_publishers/1/x").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid path parameter");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let request = Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Book Catalog API");
}
