use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Integer id from a path segment. A non-integer segment means no such
/// resource, so it is a 404 rather than a 400.
fn parse_path_id(req: &HttpRequest, name: &str) -> Result<i32, AppError> {
    let raw = req.match_info().get(name).ok_or_else(|| {
        AppError::internal(
            ErrorCode::InternalError,
            format!("route has no '{name}' segment"),
        )
    })?;

    raw.parse::<i32>().map_err(|_| {
        AppError::not_found(ErrorCode::NotFound, format!("Invalid {name}: {raw}"))
    })
}

/// `{question_id}` path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionId(pub i32);

impl FromRequest for QuestionId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_id(req, "question_id").map(QuestionId))
    }
}

/// `{category_id}` path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryId(pub i32);

impl FromRequest for CategoryId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_id(req, "category_id").map(CategoryId))
    }
}
