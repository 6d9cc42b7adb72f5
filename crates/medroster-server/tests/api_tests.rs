//! Integration tests for the REST surface.
//!
//! Each test drives the real router with `tower::ServiceExt::oneshot`
//! against an in-memory store, checking status codes, `{"message": ...}`
//! failure bodies, and the camelCase wire format.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use medroster_core::{Database, RecordService};
use medroster_server::app;

fn test_app() -> Router {
    app(RecordService::new(Database::open_in_memory().unwrap()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn sample_body(name: &str) -> Value {
    json!({
        "name": name,
        "age": 30,
        "gender": "Male",
        "bloodGroup": "O+",
        "contactNo": "9876543210",
        "address": "12 Harbor Lane",
        "bloodPressure": "120/80",
        "healthIssue": "general"
    })
}

#[tokio::test]
async fn health_reports_message_and_timestamp() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn create_returns_201_with_generated_fields() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/patients", Some(sample_body("John Smith"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["adminNo"], "ADM001");
    assert_eq!(body["name"], "John Smith");
    assert_eq!(body["bloodGroup"], "O+");
    assert!(body["createdAt"].is_string());
    assert_eq!(body["createdAt"], body["updatedAt"]);
    // Unrecorded metrics are absent on the wire
    assert!(body.get("height").is_none());
}

#[tokio::test]
async fn list_returns_records_in_admin_no_order() {
    let app = test_app();
    for name in ["Ana", "Ben", "Carla"] {
        let (status, _) = send(&app, "POST", "/patients", Some(sample_body(name))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/patients", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["adminNo"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ADM001", "ADM002", "ADM003"]);
}

#[tokio::test]
async fn get_by_admin_no_round_trips() {
    let app = test_app();
    let (_, created) = send(&app, "POST", "/patients", Some(sample_body("John Smith"))).await;

    let (status, body) = send(&app, "GET", "/patients/ADM001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn get_missing_is_404_with_message() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/patients/ADM404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Patient not found");
}

#[tokio::test]
async fn update_merges_and_ignores_immutable_keys() {
    let app = test_app();
    let (_, created) = send(&app, "POST", "/patients", Some(sample_body("John Smith"))).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/patients/ADM001",
        Some(json!({
            "adminNo": "ADM999",
            "createdAt": "1999-01-01T00:00:00Z",
            "age": 31,
            "weight": 75.5
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adminNo"], "ADM001");
    assert_eq!(body["createdAt"], created["createdAt"]);
    assert_eq!(body["age"], 31);
    assert_eq!(body["weight"], 75.5);
    // Unsupplied fields unchanged
    assert_eq!(body["name"], "John Smith");
}

#[tokio::test]
async fn update_missing_is_404() {
    let app = test_app();
    let (status, body) = send(&app, "PUT", "/patients/ADM404", Some(json!({"age": 50}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Patient not found");
}

#[tokio::test]
async fn delete_acknowledges_then_404s() {
    let app = test_app();
    send(&app, "POST", "/patients", Some(sample_body("John Smith"))).await;

    let (status, body) = send(&app, "DELETE", "/patients/ADM001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Patient deleted successfully");

    let (status, _) = send(&app, "GET", "/patients/ADM001", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/patients/ADM001", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_is_400_with_message() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/patients")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn missing_required_field_is_400() {
    let app = test_app();
    // No name at all
    let (status, body) = send(
        &app,
        "POST",
        "/patients",
        Some(json!({"age": 30, "gender": "Male"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn blank_name_is_400() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/patients", Some(sample_body("  "))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name must not be empty");
}

#[tokio::test]
async fn deletion_gap_does_not_recycle_admin_no() {
    let app = test_app();
    send(&app, "POST", "/patients", Some(sample_body("Ana"))).await;
    send(&app, "POST", "/patients", Some(sample_body("Ben"))).await;
    send(&app, "DELETE", "/patients/ADM002", None).await;

    let (_, body) = send(&app, "POST", "/patients", Some(sample_body("Carla"))).await;
    assert_eq!(body["adminNo"], "ADM003");
}
