use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::questions::QuestionResponse;
use crate::db::require_db;
use crate::domain::quiz::CategoryFilter;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::services;
use crate::state::app_state::AppState;

/// Category ids arrive as numbers or numeric strings depending on the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexibleId {
    Int(i32),
    Text(String),
}

impl FlexibleId {
    fn resolve(&self) -> Result<i32, AppError> {
        match self {
            FlexibleId::Int(id) => Ok(*id),
            FlexibleId::Text(raw) => raw.trim().parse::<i32>().map_err(|_| {
                AppError::unprocessable(
                    ErrorCode::InvalidField,
                    format!("quiz_category.id must be an integer, got '{raw}'"),
                )
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: FlexibleId,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuestionResponse,
}

async fn play_quiz(
    body: ValidatedJson<QuizRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let QuizRequest {
        previous_questions,
        quiz_category,
    } = body.into_inner();

    let previous = previous_questions.ok_or_else(|| {
        AppError::unprocessable(ErrorCode::MissingField, "missing field 'previous_questions'")
    })?;

    let filter = match quiz_category {
        Some(category) => CategoryFilter::from_id(category.id.resolve()?),
        None => CategoryFilter::All,
    };

    let db = require_db(&app_state)?;
    let question =
        services::quizzes::next_question(db, filter, &previous, &mut rand::rng()).await?;

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question: QuestionResponse::from(question),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/quizzes")
            .route(web::post().to(play_quiz))
            .default_service(web::to(super::method_not_allowed)),
    );
}
