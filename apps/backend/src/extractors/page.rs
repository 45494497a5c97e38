use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::domain::pagination::PageNumber;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// `?page=N` query parameter; absent means page 1.
///
/// Anything but a positive integer is rejected up front rather than
/// silently treated as page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub PageNumber);

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

fn parse_page(query_string: &str) -> Result<PageNumber, AppError> {
    let query = web::Query::<PageQuery>::from_query(query_string).map_err(|e| {
        AppError::bad_request(ErrorCode::InvalidPage, format!("Invalid query string: {e}"))
    })?;

    match query.into_inner().page {
        None => Ok(PageNumber::default()),
        Some(raw) => PageNumber::parse(&raw)
            .map_err(|e| AppError::bad_request(ErrorCode::InvalidPage, e.to_string())),
    }
}

impl FromRequest for Page {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_page(req.query_string()).map(Page))
    }
}
