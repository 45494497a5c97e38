//! SeaORM adapter for the questions table - generic over ConnectionTrait.

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::questions;

pub mod dto;

pub use dto::QuestionCreate;

/// LIKE escape character; not `\`, which backends quote differently
const LIKE_ESCAPE: char = '!';

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i32,
) -> Result<Option<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find_by_id(question_id).one(conn).await
}

pub async fn find_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i32,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(questions::Column::Category.eq(category_id))
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

/// Case-insensitive substring match on the question text, ordered by id.
///
/// Postgres folds case itself through `ILIKE`, with `%` and `_` in `term`
/// matching literally. SQLite's `LOWER()` and `LIKE` only fold ASCII, so
/// there the rows are folded with Unicode rules after loading.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    match conn.get_database_backend() {
        DbBackend::Postgres => {
            let pattern = format!("%{}%", escape_like(term));
            questions::Entity::find()
                .filter(
                    Expr::col(questions::Column::Question)
                        .ilike(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
                )
                .order_by_asc(questions::Column::Id)
                .all(conn)
                .await
        }
        _ => {
            let needle = term.to_lowercase();
            let all = find_all(conn).await?;
            Ok(all
                .into_iter()
                .filter(|q| contains_folded(&q.question, &needle))
                .collect())
        }
    }
}

/// `needle` must already be lowercased.
fn contains_folded(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    questions::Entity::find().count(conn).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<questions::Model, sea_orm::DbErr> {
    let active = questions::ActiveModel {
        id: NotSet,
        question: Set(dto.question),
        answer: Set(dto.answer),
        category: Set(dto.category),
        difficulty: Set(dto.difficulty),
    };
    active.insert(conn).await
}

/// Delete by id; returns the number of rows removed (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = questions::Entity::delete_by_id(question_id).exec(conn).await?;
    Ok(result.rows_affected)
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == LIKE_ESCAPE || ch == '%' || ch == '_' {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out
}
