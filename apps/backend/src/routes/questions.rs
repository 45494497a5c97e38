use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{Page, QuestionId, ValidatedJson};
use crate::repos::categories::label_map;
use crate::repos::questions::Question;
use crate::services;
use crate::services::questions::QuestionDraft;
use crate::state::app_state::AppState;

/// Wire form of a question.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuestionResponse {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

fn to_responses(questions: Vec<Question>) -> Vec<QuestionResponse> {
    questions.into_iter().map(QuestionResponse::from).collect()
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    pub categories: BTreeMap<i32, String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub total_questions: u64,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    pub total_questions: u64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// Fields stay untyped here so blank placeholders and numeric strings reach
/// the service's validation instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

impl From<CreateQuestionRequest> for QuestionDraft {
    fn from(body: CreateQuestionRequest) -> Self {
        Self {
            question: body.question,
            answer: body.answer,
            category: body.category,
            difficulty: body.difficulty,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<Value>,
}

async fn list_questions(
    page: Page,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let listing = services::questions::list_questions(db, page.0).await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions: to_responses(listing.questions),
        total_questions: listing.total,
        current_category: None,
        categories: label_map(&listing.categories),
    }))
}

async fn delete_question(
    question_id: QuestionId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let total = services::questions::delete_question(db, question_id.0).await?;

    Ok(HttpResponse::Ok().json(DeletedResponse {
        success: true,
        deleted: question_id.0,
        total_questions: total,
    }))
}

async fn create_question(
    body: ValidatedJson<CreateQuestionRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let (created, total) =
        services::questions::create_question(db, QuestionDraft::from(body.into_inner())).await?;

    Ok(HttpResponse::Ok().json(CreatedResponse {
        success: true,
        created: created.id,
        total_questions: total,
    }))
}

async fn search_questions(
    page: Page,
    body: ValidatedJson<SearchRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let term = match body.into_inner().search_term {
        Some(Value::String(term)) => term,
        None | Some(Value::Null) => {
            return Err(AppError::unprocessable(
                ErrorCode::MissingField,
                "missing field 'searchTerm'",
            ))
        }
        Some(_) => {
            return Err(AppError::unprocessable(
                ErrorCode::InvalidField,
                "field 'searchTerm' must be a string",
            ))
        }
    };

    let db = require_db(&app_state)?;
    let found = services::questions::search_questions(db, &term, page.0).await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        questions: to_responses(found.questions),
        total_questions: found.total,
        current_category: None,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/questions")
            .route(web::get().to(list_questions))
            .route(web::post().to(create_question))
            .default_service(web::to(super::method_not_allowed)),
    );
    // Must precede `{question_id}` so "search" is not taken for an id
    cfg.service(
        web::resource("/questions/search")
            .route(web::post().to(search_questions))
            .default_service(web::to(super::method_not_allowed)),
    );
    cfg.service(
        web::resource("/questions/{question_id}")
            .route(web::delete().to(delete_question))
            .default_service(web::to(super::method_not_allowed)),
    );
}
