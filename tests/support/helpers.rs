// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tourdesk_core::{
    application::services::ApplicationServices,
    domain::tour::TourRepository,
    infrastructure::{repositories::InMemoryTourRepository, time::SystemClock},
    presentation::http::{
        error::{ErrorResponder, MessageExposure},
        routes::build_router,
        state::HttpState,
    },
};

pub fn make_test_router() -> axum::Router {
    make_test_router_with_exposure(MessageExposure::Sanitized)
}

pub fn make_test_router_with_exposure(exposure: MessageExposure) -> axum::Router {
    let repo: Arc<dyn TourRepository> = Arc::new(InMemoryTourRepository::new(Arc::new(SystemClock)));
    make_test_router_with_repo(repo, exposure)
}

pub fn make_test_router_with_repo(
    repo: Arc<dyn TourRepository>,
    exposure: MessageExposure,
) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(repo));
    build_router(HttpState { services }, ErrorResponder::new(exposure))
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn valid_tour(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "duration": 5,
        "maxGroupSize": 25,
        "difficulty": "easy",
        "price": 397.0,
        "summary": "Breathtaking hike through the Canadian Banff National Park"
    })
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (_, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

/// Assert that a response is a `{ statusCode, message }` error body with the
/// expected status and returns the message.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let (_, json) = read_json(resp).await;
    let object = json.as_object().expect("error body is an object");
    assert_eq!(object.len(), 2, "unexpected error body: {json}");
    assert_eq!(
        object.get("statusCode").and_then(Value::as_u64),
        Some(u64::from(expected_status.as_u16()))
    );
    let message = object
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    assert!(!message.is_empty(), "expected non-empty message");
    message
}
