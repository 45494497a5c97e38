use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// JSON body extractor with the API's error policy.
///
/// Bytes that are not JSON at all are a 400; JSON whose shape does not fit
/// `T` (missing required key, wrong type) is a 422. The content type is not
/// enforced; browser clients do not always set it.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Extract content type before creating the async future to avoid borrow-across-await
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(
                        trace_id = %trace_id,
                        error = %e,
                        "Failed to read request body chunk"
                    );
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    error = %e,
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                classify_json_error(&e)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Map a serde_json failure onto the API's 400/422 split.
fn classify_json_error(error: &JsonError) -> AppError {
    match error.classify() {
        Category::Syntax => AppError::bad_request(
            ErrorCode::InvalidJson,
            format!("Invalid JSON at line {}", error.line()),
        ),
        Category::Eof => AppError::bad_request(
            ErrorCode::InvalidJson,
            "Invalid JSON: unexpected end of input",
        ),
        Category::Io => AppError::bad_request(
            ErrorCode::InvalidJson,
            "Invalid JSON: I/O error while reading body",
        ),
        Category::Data => AppError::unprocessable(
            ErrorCode::InvalidField,
            format!("JSON body does not match the expected shape: {error}"),
        ),
    }
}
