#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub use backend_test_support::assert_error_envelope;

/// Assert a 200 with `success: true` and hand back the body.
pub async fn read_success<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let status = resp.status();
    let path = resp.request().path().to_owned();
    let body = test::read_body(resp).await;
    let json: Value = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "{path} returned non-JSON body: {}",
            String::from_utf8_lossy(&body)
        )
    });
    assert_eq!(status.as_u16(), 200, "{path} failed: {json}");
    assert_eq!(json["success"], true, "{path}: {json}");
    json
}

/// Ids of the `questions` array in a listing body.
pub fn question_ids(json: &Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question id"))
        .collect()
}
