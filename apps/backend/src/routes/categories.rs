use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::questions::QuestionResponse;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::extractors::{CategoryId, Page};
use crate::repos::categories::label_map;
use crate::services;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    /// id -> label; JSON object keys are the ids as strings
    pub categories: BTreeMap<i32, String>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub current_category: String,
    pub total_questions: usize,
}

async fn list_categories(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let categories = services::categories::list_categories(db).await?;

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: label_map(&categories),
    }))
}

async fn questions_in_category(
    category_id: CategoryId,
    page: Page,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let listing = services::questions::questions_in_category(db, category_id.0, page.0)
        .await
        .map_err(|e| match e {
            // The category is a reference the client supplied, not the resource itself
            DomainError::NotFound(NotFoundKind::Category, detail) => {
                AppError::bad_request(ErrorCode::UnknownCategory, detail)
            }
            other => AppError::from(other),
        })?;

    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        questions: listing
            .page
            .questions
            .into_iter()
            .map(QuestionResponse::from)
            .collect(),
        current_category: listing.category.kind,
        total_questions: listing.page.total,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/categories")
            .route(web::get().to(list_categories))
            .default_service(web::to(super::method_not_allowed)),
    );
    cfg.service(
        web::resource("/categories/{category_id}/questions")
            .route(web::get().to(questions_in_category))
            .default_service(web::to(super::method_not_allowed)),
    );
}
