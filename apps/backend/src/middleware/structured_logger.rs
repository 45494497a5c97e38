use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;

/// One `request_completed` event per request, level by status class.
///
/// Carries the matched route template next to the raw path so question and
/// quiz endpoints aggregate per route rather than per id.
///
/// Must be wrapped inside `RequestTrace` (registered before it) so the trace
/// id is already in the request extensions.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let line = RequestLine {
            method: req.method().to_string(),
            // Template form keeps ids out of the field, e.g. `/questions/{question_id}`.
            route: req
                .match_pattern()
                .unwrap_or_else(|| UNMATCHED_ROUTE.to_string()),
            path: req.path().to_string(),
            trace_id: req
                .extensions()
                .get::<TraceId>()
                .map(|t| t.0.clone())
                .unwrap_or_else(|| "unknown".to_string()),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            line.emit(status, start.elapsed().as_micros() as u64);

            result
        })
    }
}

const UNMATCHED_ROUTE: &str = "unmatched";

/// Request fields captured before the inner service consumes the request.
struct RequestLine {
    method: String,
    route: String,
    path: String,
    trace_id: String,
}

impl RequestLine {
    fn emit(&self, status: StatusCode, duration_us: u64) {
        let status_code = status.as_u16();
        let outcome = outcome(status);
        let Self {
            method,
            route,
            path,
            trace_id,
        } = self;

        match outcome {
            "server_error" => {
                error!(http.method = %method, http.route = %route, url.path = %path, http.status_code = status_code, outcome, duration_us, trace_id = %trace_id, "request_completed")
            }
            "client_error" => {
                warn!(http.method = %method, http.route = %route, url.path = %path, http.status_code = status_code, outcome, duration_us, trace_id = %trace_id, "request_completed")
            }
            _ => {
                info!(http.method = %method, http.route = %route, url.path = %path, http.status_code = status_code, outcome, duration_us, trace_id = %trace_id, "request_completed")
            }
        }
    }
}

/// Coarse status class for dashboards that split errors the caller caused
/// from errors the service caused.
fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "server_error"
    } else if status.is_client_error() {
        "client_error"
    } else {
        "ok"
    }
}
