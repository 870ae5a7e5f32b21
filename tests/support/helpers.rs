// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use kekka_core::infrastructure::messages::StaticMessageCatalog;
use kekka_core::presentation::http::envelope::Envelope;
use kekka_core::presentation::http::error::BoundaryResult;
use kekka_core::presentation::http::middleware::boundary;
use kekka_core::presentation::http::routes::build_router;
use kekka_core::presentation::http::state::HttpState;
use serde_json::Value;
use std::sync::Arc;

pub fn test_state() -> HttpState {
    HttpState {
        catalog: Arc::new(StaticMessageCatalog::with_defaults()),
        default_locale: "en".to_string(),
    }
}

pub fn state_with_catalog(catalog: StaticMessageCatalog, locale: &str) -> HttpState {
    HttpState {
        catalog: Arc::new(catalog),
        default_locale: locale.to_string(),
    }
}

pub fn make_test_router() -> Router {
    build_router(test_state())
}

pub fn make_test_router_with_state(state: HttpState) -> Router {
    build_router(state)
}

async fn boom() -> BoundaryResult<Json<Envelope<()>>> {
    Err(anyhow::anyhow!("disk on fire").into())
}

/// Router with a route that raises a non-domain failure, to drive the
/// system-error branch of the boundary.
pub fn make_failing_router(state: HttpState) -> Router {
    Router::new()
        .route("/boom", get(boom))
        .layer(middleware::from_fn(boundary::translate_errors))
        .layer(Extension(state))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response carries a FAIL envelope with the expected transport
/// status, response code, and message.
pub async fn assert_fail_envelope(
    resp: Response,
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "FAIL");
    assert_eq!(json["responseCode"], expected_code);
    assert_eq!(json["responseMessage"], expected_message);
    assert!(json.get("payload").is_none(), "FAIL envelope must carry no payload");
}
