//! Question repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::questions_sea::{self as questions_adapter, QuestionCreate};
use crate::domain::quiz::QuizItem;
use crate::entities::questions;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Question domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Validated input for a new question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<questions::Model> for Question {
    fn from(model: questions::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            category: model.category,
            difficulty: model.difficulty,
        }
    }
}

impl QuizItem for Question {
    fn id(&self) -> i32 {
        self.id
    }

    fn category(&self) -> i32 {
        self.category
    }
}

fn into_domain(models: Vec<questions::Model>) -> Vec<Question> {
    models.into_iter().map(Question::from).collect()
}

/// Every question, ordered by id.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Question>, DomainError> {
    Ok(into_domain(questions_adapter::find_all(conn).await?))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i32,
) -> Result<Option<Question>, DomainError> {
    let model = questions_adapter::find_by_id(conn, question_id).await?;
    Ok(model.map(Question::from))
}

pub async fn list_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i32,
) -> Result<Vec<Question>, DomainError> {
    Ok(into_domain(
        questions_adapter::find_by_category(conn, category_id).await?,
    ))
}

pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<Question>, DomainError> {
    Ok(into_domain(questions_adapter::search(conn, term).await?))
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(questions_adapter::count(conn).await?)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new_question: NewQuestion,
) -> Result<Question, DomainError> {
    let dto = QuestionCreate {
        question: new_question.question,
        answer: new_question.answer,
        category: new_question.category,
        difficulty: new_question.difficulty,
    };
    let model = questions_adapter::create(conn, dto).await?;
    Ok(Question::from(model))
}

/// Delete a question; a missing row is `NotFound`.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i32,
) -> Result<(), DomainError> {
    let removed = questions_adapter::delete_by_id(conn, question_id).await?;
    if removed == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Question,
            format!("Question {question_id} not found"),
        ));
    }
    Ok(())
}
