// tests/support/helpers.rs
use super::mocks::{CapturingSink, FixedClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use recipe_hub_core::application::dto::ErrorResponse;
use recipe_hub_core::application::services::ApplicationServices;
use recipe_hub_core::domain::user::UserRepository;
use recipe_hub_core::infrastructure::repositories::InMemoryUserRepository;
use recipe_hub_core::presentation::http::{
    error::ErrorEnvelope, routes::build_router, state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;

pub struct TestApp {
    pub router: axum::Router,
    pub sink: Arc<CapturingSink>,
}

pub fn make_test_app() -> TestApp {
    make_test_app_with_repo(Arc::new(InMemoryUserRepository::new()), 32)
}

pub fn make_test_app_with_repo(user_repo: Arc<dyn UserRepository>, max_depth: usize) -> TestApp {
    let (state, sink) = make_test_state(user_repo, max_depth);
    TestApp {
        router: build_router(state),
        sink,
    }
}

/// 固定時計と記録用シンクで組み立てた状態。独自ルーターを組むテスト用。
pub fn make_test_state(
    user_repo: Arc<dyn UserRepository>,
    max_depth: usize,
) -> (HttpState, Arc<CapturingSink>) {
    let sink = Arc::new(CapturingSink::default());
    let services = Arc::new(ApplicationServices::new(
        user_repo,
        Arc::new(FixedClock),
        sink.clone(),
    ));
    let state = HttpState {
        services,
        max_validation_depth: max_depth,
    };
    (state, sink)
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an error envelope with the expected status and
/// code, returning the normalized payload.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_code: &str,
) -> ErrorResponse {
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status);

    let envelope: ErrorEnvelope = serde_json::from_value(json).expect("error envelope");
    assert_eq!(envelope.errors.len(), 1);
    let error = envelope.errors.into_iter().next().unwrap();
    assert_eq!(error.message, error.extensions.message);
    assert_eq!(error.extensions.code, expected_code);
    assert_eq!(error.extensions.status_code, expected_status.as_u16());
    assert!(!error.extensions.message.is_empty());
    error.extensions
}
