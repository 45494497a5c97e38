//! Question listing, creation, deletion and search.

use sea_orm::ConnectionTrait;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::pagination::{paginate, PageNumber};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::categories::{self, Category};
use crate::repos::questions::{self, NewQuestion, Question};

/// Accepted difficulty scores.
pub const DIFFICULTY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// One page of the full question list plus what the listing view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total: usize,
    /// Ordered by label
    pub categories: Vec<Category>,
}

/// One page of a filtered question list and its unpaginated size.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryQuestions {
    pub category: Category,
    pub page: QuestionPage,
}

/// Raw creation payload as received; fields are validated by [`validate_draft`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionDraft {
    pub question: Option<Value>,
    pub answer: Option<Value>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

fn page_of(all: Vec<Question>, page: PageNumber) -> QuestionPage {
    QuestionPage {
        questions: paginate(&all, page).to_vec(),
        total: all.len(),
    }
}

/// Page `page` of every question. An empty page (including page 1 of an
/// empty store) is `NotFound`.
pub async fn list_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: PageNumber,
) -> Result<QuestionListing, DomainError> {
    let all = questions::list_all(conn).await?;
    let categories = categories::list_by_kind(conn).await?;

    let QuestionPage { questions, total } = page_of(all, page);
    if questions.is_empty() {
        return Err(DomainError::not_found(
            NotFoundKind::Page,
            format!("page {} holds no questions (total {total})", page.get()),
        ));
    }

    Ok(QuestionListing {
        questions,
        total,
        categories,
    })
}

/// Delete a question and return the remaining total.
pub async fn delete_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i32,
) -> Result<u64, DomainError> {
    if questions::find_by_id(conn, question_id).await?.is_none() {
        return Err(DomainError::not_found(
            NotFoundKind::Question,
            format!("Question {question_id} not found"),
        ));
    }

    questions::delete(conn, question_id).await?;
    let total = questions::count(conn).await?;
    info!(question_id, total, "question.deleted");
    Ok(total)
}

/// Validate and insert a question; returns it with the new total.
pub async fn create_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    draft: QuestionDraft,
) -> Result<(Question, u64), DomainError> {
    let new_question = validate_draft(draft)?;

    if categories::find_by_id(conn, new_question.category)
        .await?
        .is_none()
    {
        return Err(DomainError::validation(format!(
            "category {} does not exist",
            new_question.category
        )));
    }

    let created = questions::create(conn, new_question).await?;
    let total = questions::count(conn).await?;
    info!(
        question_id = created.id,
        category = created.category,
        total,
        "question.created"
    );
    Ok((created, total))
}

/// Case-insensitive substring search over question text.
pub async fn search_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
    page: PageNumber,
) -> Result<QuestionPage, DomainError> {
    let found = questions::search(conn, term).await?;
    debug!(matches = found.len(), "question.search");
    Ok(page_of(found, page))
}

/// Questions of one category. An unknown category is `NotFound(Category)`;
/// an empty page is fine.
pub async fn questions_in_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i32,
    page: PageNumber,
) -> Result<CategoryQuestions, DomainError> {
    let category = categories::find_by_id(conn, category_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Category,
                format!("Category {category_id} not found"),
            )
        })?;

    let matching = questions::list_by_category(conn, category_id).await?;
    Ok(CategoryQuestions {
        category,
        page: page_of(matching, page),
    })
}

/// Normalize a creation payload.
///
/// A field is missing when absent, null or a blank string (the single-space
/// placeholder some clients send). `category` and `difficulty` accept
/// integers or numeric strings.
pub fn validate_draft(draft: QuestionDraft) -> Result<NewQuestion, DomainError> {
    let question = required_text("question", draft.question)?;
    let answer = required_text("answer", draft.answer)?;
    let category = required_int("category", draft.category)?;
    let difficulty = required_int("difficulty", draft.difficulty)?;

    if !DIFFICULTY_RANGE.contains(&difficulty) {
        return Err(DomainError::validation(format!(
            "difficulty must be between {} and {}, got {difficulty}",
            DIFFICULTY_RANGE.start(),
            DIFFICULTY_RANGE.end()
        )));
    }

    Ok(NewQuestion {
        question,
        answer,
        category,
        difficulty,
    })
}

fn missing(name: &str) -> DomainError {
    DomainError::validation(format!("missing field '{name}'"))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn required_text(name: &str, value: Option<Value>) -> Result<String, DomainError> {
    match value {
        None => Err(missing(name)),
        Some(v) if is_blank(&v) => Err(missing(name)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(DomainError::validation(format!(
            "field '{name}' must be a string"
        ))),
    }
}

fn required_int(name: &str, value: Option<Value>) -> Result<i32, DomainError> {
    let invalid = || DomainError::validation(format!("field '{name}' must be an integer"));

    match value {
        None => Err(missing(name)),
        Some(v) if is_blank(&v) => Err(missing(name)),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(invalid),
        Some(Value::String(s)) => s.trim().parse::<i32>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}
