use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

/// Register every API route plus the JSON 404 fallback.
///
/// Shared by `main.rs` and the test harness so both see the same table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(categories::configure_routes)
        .configure(questions::configure_routes)
        .configure(quizzes::configure_routes)
        .default_service(web::to(not_found));
}

/// Fallback for paths no resource matches.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {}", req.path()),
    ))
}

/// Fallback for a known resource hit with a verb it does not serve.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::method_not_allowed(format!(
        "{} {}",
        req.method(),
        req.path()
    )))
}
