//! HTTP contract tests for the records REST API
//!
//! The router is assembled exactly as the server mounts it (nested under
//! /api/v1) over in-memory repository doubles, then driven with oneshot
//! requests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use records_service::api::rest::routes;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

mod common;
use common::test_service;

fn app() -> Router {
    Router::new().nest("/api/v1", routes::router(Arc::new(test_service())))
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    let response = app.clone().oneshot(request).await.expect("request succeeds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn customer_payload(email: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "phone": "555-0100",
        "address": "12 Analytical Row",
        "city": "London",
        "country": "UK"
    })
}

#[tokio::test]
async fn test_customer_crud_over_http() {
    let app = app();

    // Create
    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/customers",
        Some(customer_payload("ada@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["customer_id"], 1);
    assert_eq!(body["email"], "ada@example.com");

    // Read back
    let (status, body) = request(&app, "GET", "/api/v1/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Ada");

    // Full overwrite
    let mut updated = customer_payload("ada@example.com");
    updated["city"] = json!("Ockham");
    let (status, body) = request(&app, "PUT", "/api/v1/customers/1", Some(updated)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Ockham");

    // Delete, then the record is gone
    let (status, _) = request(&app, "DELETE", "/api/v1/customers/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = request(&app, "GET", "/api/v1/customers/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Customer Not Found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_duplicate_email_returns_conflict_problem() {
    let app = app();

    let (status, _) = request(
        &app,
        "POST",
        "/api/v1/customers",
        Some(customer_payload("ada@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/customers",
        Some(customer_payload("ada@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Conflict");
    assert!(body["detail"]
        .as_str()
        .is_some_and(|detail| detail.contains("ada@example.com")));
}

#[tokio::test]
async fn test_invalid_email_returns_validation_problem() {
    let app = app();

    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/customers",
        Some(customer_payload("not-an-email")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["title"], "Validation Error");
}

#[tokio::test]
async fn test_missing_field_rejected_by_extractor() {
    let app = app();

    // No email at all: the framework's schema layer rejects it before
    // the handler runs
    let (status, _) = request(
        &app,
        "POST",
        "/api/v1/customers",
        Some(json!({ "first_name": "Ada", "last_name": "Lovelace" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_customers_pagination() {
    let app = app();

    for i in 1..=3 {
        let (status, _) = request(
            &app,
            "POST",
            "/api/v1/customers",
            Some(customer_payload(&format!("customer{i}@example.com"))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = request(&app, "GET", "/api/v1/customers?limit=2&offset=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["offset"], 1);
    let ids: Vec<i64> = body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["customer_id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn test_zero_limit_rejected() {
    let app = app();

    let (status, body) = request(&app, "GET", "/api/v1/customers?limit=0", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["title"], "Validation Error");
}

#[tokio::test]
async fn test_category_name_conflict() {
    let app = app();

    let payload = json!({ "category_name": "Beverages", "description": "Drinks" });
    let (status, body) = request(&app, "POST", "/api/v1/categories", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["category_id"], 1);

    let (status, body) = request(&app, "POST", "/api/v1/categories", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Conflict");
}

#[tokio::test]
async fn test_category_description_optional() {
    let app = app();

    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/categories",
        Some(json!({ "category_name": "Produce" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], Value::Null);
}

#[tokio::test]
async fn test_employee_round_trip() {
    let app = app();

    let payload = json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "position": "Engineer",
        "hire_date": "2021-04-12",
        "salary": "55000.00"
    });

    let (status, body) = request(&app, "POST", "/api/v1/employees", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["employee_id"], 1);
    assert_eq!(body["hire_date"], "2021-04-12");
    assert_eq!(body["salary"], "55000.00");

    let (status, body) = request(&app, "GET", "/api/v1/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    let (status, _) = request(&app, "DELETE", "/api/v1/employees/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = request(&app, "GET", "/api/v1/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Employee Not Found");
}

#[tokio::test]
async fn test_update_absent_employee_returns_404() {
    let app = app();

    let payload = json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "hire_date": "2021-04-12",
        "salary": "55000.00"
    });

    let (status, body) = request(&app, "PUT", "/api/v1/employees/9", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}
