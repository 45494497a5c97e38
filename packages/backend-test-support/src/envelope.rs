//! Assertions for the backend's error envelope.
//!
//! Kept free of backend types so the contract is checked from the outside:
//! `{"success": false, "error": <status>, "message": <fixed text>}` with a
//! JSON content type and an `x-trace-id` header.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE};
use actix_web::test;
use serde_json::Value;

/// Fixed message the backend pairs with each error status.
pub fn expected_message(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        404 => "Resource Not Found",
        405 => "Method Not Allowed",
        422 => "Unprocessable",
        _ => "Internal Server Error",
    }
}

/// Assert `resp` is an error envelope for `expected_status`; returns the
/// trace id from the header.
pub async fn assert_error_envelope<B>(resp: ServiceResponse<B>, expected_status: u16) -> String
where
    B: MessageBody,
{
    assert_eq!(
        resp.status().as_u16(),
        expected_status,
        "unexpected status for {}",
        resp.request().path()
    );

    let headers = resp.headers().clone();

    let trace_id = headers
        .get(HeaderName::from_static("x-trace-id"))
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("response body should be valid UTF-8");
    let json: Value = serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("error body is not JSON. Raw body: {body_str}"));

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], expected_status);
    assert_eq!(json["message"], expected_message(expected_status));
    assert_eq!(
        json.as_object().map(|o| o.len()),
        Some(3),
        "envelope must carry exactly success/error/message: {body_str}"
    );

    trace_id
}
