//! Router behavior that is decided before any database work: input rejection, path
//! parsing, operational endpoints. The pool is lazy and never reaches a server.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use customer_registry::{app, AppState};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tower::ServiceExt;

fn test_app(body_limit: usize) -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy("postgres://registry@127.0.0.1:1/registry")
        .expect("lazy pool");
    app(AppState::new(pool), body_limit)
}

async fn send(router: Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, b.len());
            Body::from(b)
        }
        None => Body::empty(),
    };
    let resp = router.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_and_version() {
    let (status, body) = send(test_app(1024), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(test_app(1024), Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "customer-registry");
    assert_eq!(body["description"], env!("CARGO_PKG_DESCRIPTION"));
}

#[tokio::test]
async fn ready_reports_unreachable_database() {
    let (status, body) = send(test_app(1024), Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");
    assert_eq!(body["schema"], "unknown");
    assert!(body["pool"]["idle"].is_u64());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = send(test_app(1024), Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/addresses/{id}"]["get"].is_object());
}

#[tokio::test]
async fn non_uuid_id_is_bad_request() {
    for uri in ["/customers/42", "/addresses/not-a-uuid"] {
        let (status, body) = send(test_app(1024), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"]["code"], "bad_request");
    }
}

#[tokio::test]
async fn incomplete_address_is_rejected_before_persistence() {
    let payload = json!({ "street": "123 Main St", "city": "Springfield" }).to_string();
    let (status, body) = send(test_app(1024), Method::POST, "/addresses/", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn blank_customer_name_is_rejected() {
    let payload = json!({ "first_name": "Jane", "last_name": "" }).to_string();
    let (status, body) = send(test_app(1024), Method::POST, "/customers", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["message"], "validation: last_name must not be blank");
}

#[tokio::test]
async fn malformed_address_reference_is_rejected() {
    let payload = json!({ "first_name": "Jane", "last_name": "Doe", "address_bid": 7 }).to_string();
    let (status, _) = send(test_app(1024), Method::POST, "/customers/", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn array_body_is_bad_request() {
    let (status, body) = send(test_app(1024), Method::POST, "/customers/", Some("[]".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let payload = json!({ "street": "x".repeat(256), "city": "c", "state": "s", "zip_code": "z" }).to_string();
    let (status, _) = send(test_app(64), Method::POST, "/addresses/", Some(payload)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn nul_in_required_field_is_rejected() {
    let payload = json!({ "street": "a\u{0}b", "city": "Springfield", "state": "IL", "zip_code": "62701" }).to_string();
    let (status, body) = send(test_app(1024), Method::POST, "/addresses/", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "validation: street must not contain NUL");
}

#[tokio::test]
async fn invalid_json_uses_error_envelope() {
    let (status, body) = send(test_app(1024), Method::POST, "/customers/", Some("{\"first_name\":".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn missing_content_type_uses_error_envelope() {
    let payload = json!({ "first_name": "Jane", "last_name": "Doe" }).to_string();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/customers/")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .unwrap();
    let resp = test_app(1024).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "bad_request");
}
