use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use productadmin::{config::MIGRATOR, handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

const FRONTEND_URL: &str = "http://localhost:3000";

// A fresh in-memory database per test; one connection so every request sees
// the same database.
async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");

    MIGRATOR.run(&pool).await.expect("migrations");

    AppRouter::build(AppState::new(pool), FRONTEND_URL).expect("router")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

async fn seed_product(app: &Router) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/products",
        Some(json!({"name": "Mouse Testing", "price": 55})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().expect("created id")
}

#[tokio::test]
async fn post_empty_body_returns_four_validation_errors() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/api/products", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("errors").is_some());
    assert_eq!(body["errors"].as_array().expect("errors array").len(), 4);
}

#[tokio::test]
async fn post_validates_that_price_is_greater_than_zero() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Monitor Curvo", "price": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "El precio no puede ser menor a cero");
}

#[tokio::test]
async fn post_creates_a_new_product() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Mouse Testing", "price": 55})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("data").is_some());
    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["name"], "Mouse Testing");
    assert_eq!(body["data"]["availability"], true);
}

#[tokio::test]
async fn get_returns_a_json_response_with_products() {
    let app = test_app().await;
    seed_product(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("json"));

    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["data"].as_array().expect("data array").len(), 1);
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn get_list_orders_products_by_id_descending() {
    let app = test_app().await;
    let first = seed_product(&app).await;
    let second = seed_product(&app).await;

    let (status, body) = send(&app, "GET", "/api/products", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data[0]["id"].as_i64(), Some(second));
    assert_eq!(data[1]["id"].as_i64(), Some(first));
}

#[tokio::test]
async fn get_by_id_returns_404_for_a_non_existent_product() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/products/2000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Producto no encontrado.");
}

#[tokio::test]
async fn get_by_id_checks_a_valid_id_in_the_url() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/products/not-valid-url", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "ID no valido");
}

#[tokio::test]
async fn get_by_id_returns_a_single_product() {
    let app = test_app().await;
    let id = seed_product(&app).await;

    let (status, body) = send(&app, "GET", &format!("/api/products/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"].as_i64(), Some(id));
}

#[tokio::test]
async fn put_checks_a_valid_id_in_the_url() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/products/not-valid-url",
        Some(json!({"name": "Monitor Curvo", "availability": true, "price": 300})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "ID no valido");
}

#[tokio::test]
async fn put_with_empty_body_returns_five_validation_errors() {
    let app = test_app().await;
    let id = seed_product(&app).await;

    let (status, body) = send(&app, "PUT", &format!("/api/products/{id}"), Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().expect("errors array").len(), 5);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn put_validates_that_price_is_greater_than_zero() {
    let app = test_app().await;
    let id = seed_product(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/products/{id}"),
        Some(json!({"name": "Monitor Curvo", "availability": true, "price": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "El precio no puede ser menor a cero");
}

#[tokio::test]
async fn put_returns_404_for_a_non_existent_product() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/products/2000",
        Some(json!({"name": "Monitor Curvo", "availability": true, "price": 300})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Producto no encontrado.");
}

#[tokio::test]
async fn put_updates_an_existing_product_with_valid_data() {
    let app = test_app().await;
    let id = seed_product(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/products/{id}"),
        Some(json!({"name": "Monitor Curvo", "availability": false, "price": 300})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["name"], "Monitor Curvo");
    assert_eq!(body["data"]["price"], 300.0);
    assert_eq!(body["data"]["availability"], false);
}

#[tokio::test]
async fn patch_returns_404_for_a_non_existent_product() {
    let app = test_app().await;

    let (status, body) = send(&app, "PATCH", "/api/products/2000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Producto no encontrado.");
}

#[tokio::test]
async fn patch_toggles_the_product_availability() {
    let app = test_app().await;
    let id = seed_product(&app).await;

    let (status, body) = send(&app, "PATCH", &format!("/api/products/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["availability"], false);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn patch_twice_restores_the_original_availability() {
    let app = test_app().await;
    let id = seed_product(&app).await;

    let (_, first) = send(&app, "PATCH", &format!("/api/products/{id}"), None).await;
    let (_, second) = send(&app, "PATCH", &format!("/api/products/{id}"), None).await;

    assert_eq!(first["data"]["availability"], false);
    assert_eq!(second["data"]["availability"], true);
}

#[tokio::test]
async fn delete_checks_a_valid_id_in_the_url() {
    let app = test_app().await;

    let (status, body) = send(&app, "DELETE", "/api/products/not-valid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["msg"], "ID no valido");
}

#[tokio::test]
async fn delete_returns_404_for_a_non_existent_product() {
    let app = test_app().await;

    let (status, body) = send(&app, "DELETE", "/api/products/2000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Producto no encontrado.");
}

#[tokio::test]
async fn delete_removes_an_existing_product() {
    let app = test_app().await;
    let id = seed_product(&app).await;

    let (status, body) = send(&app, "DELETE", &format!("/api/products/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": "Producto Eliminado"}));

    let (status, _) = send(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
