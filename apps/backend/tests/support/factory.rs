#![allow(dead_code)]

use sea_orm::{ActiveModelTrait, ConnectionTrait, NotSet, Set};
use trivia_backend::config::db::DbProfile;
use trivia_backend::entities::questions;
use trivia_backend::infra::state::build_state;
use trivia_backend::state::app_state::AppState;

/// Category ids as seeded by the migrations.
pub const SCIENCE: i32 = 1;
pub const ART: i32 = 2;
pub const GEOGRAPHY: i32 = 3;
pub const HISTORY: i32 = 4;

/// Fresh, migrated, private in-memory store.
pub async fn db_state() -> AppState {
    build_state()
        .with_db(DbProfile::InMemory)
        .build()
        .await
        .expect("build in-memory state")
}

/// Insert a question directly and return its id.
pub async fn seed_question(
    conn: &impl ConnectionTrait,
    question: &str,
    answer: &str,
    category: i32,
    difficulty: i32,
) -> i32 {
    let model = questions::ActiveModel {
        id: NotSet,
        question: Set(question.to_string()),
        answer: Set(answer.to_string()),
        category: Set(category),
        difficulty: Set(difficulty),
    }
    .insert(conn)
    .await
    .expect("insert question");
    model.id
}

/// Insert `n` questions named "Question {i}" into `category`; returns their ids.
pub async fn seed_many(conn: &impl ConnectionTrait, n: usize, category: i32) -> Vec<i32> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        ids.push(seed_question(conn, &format!("Question {i}"), &format!("Answer {i}"), category, 1).await);
    }
    ids
}
