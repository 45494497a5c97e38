use rand::Rng;
use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::quiz::{pick_question, CategoryFilter};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::questions::{self, Question};

/// Next quiz question: a uniformly random unseen question from `filter`.
///
/// Once every matching question has been asked the result is
/// `NotFound(QuizQuestion)`.
pub async fn next_question<C, R>(
    conn: &C,
    filter: CategoryFilter,
    previous: &[i32],
    rng: &mut R,
) -> Result<Question, DomainError>
where
    C: ConnectionTrait + Send + Sync,
    R: Rng + ?Sized,
{
    let pool = questions::list_all(conn).await?;

    match pick_question(&pool, filter, previous, rng) {
        Some(question) => Ok(question.clone()),
        None => {
            info!(
                filter = ?filter,
                asked = previous.len(),
                "quiz.exhausted"
            );
            Err(DomainError::not_found(
                NotFoundKind::QuizQuestion,
                "No more questions",
            ))
        }
    }
}
