use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use trivia_backend::domain::CategoryFilter;
use trivia_backend::errors::domain::{DomainError, NotFoundKind};
use trivia_backend::services::quizzes::next_question;

use crate::support::db_state;
use crate::support::factory::{seed_many, ART, GEOGRAPHY};

#[tokio::test]
async fn seeded_rng_walk_covers_the_category_exactly_once() {
    let state = db_state().await;
    let db = state.db().expect("db");
    let geography: BTreeSet<i32> = seed_many(db, 6, GEOGRAPHY).await.into_iter().collect();
    seed_many(db, 6, ART).await;

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut previous = Vec::new();
    while let Ok(question) =
        next_question(db, CategoryFilter::Only(GEOGRAPHY), &previous, &mut rng).await
    {
        assert_eq!(question.category, GEOGRAPHY);
        assert!(!previous.contains(&question.id));
        previous.push(question.id);
    }

    assert_eq!(previous.iter().copied().collect::<BTreeSet<_>>(), geography);
}

#[tokio::test]
async fn same_seed_same_sequence() {
    let state = db_state().await;
    let db = state.db().expect("db");
    seed_many(db, 10, ART).await;

    let mut first = ChaCha8Rng::seed_from_u64(99);
    let mut second = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..5 {
        let a = next_question(db, CategoryFilter::All, &[], &mut first).await.expect("a");
        let b = next_question(db, CategoryFilter::All, &[], &mut second).await.expect("b");
        assert_eq!(a, b);
    }
}

#[tokio::test]
async fn exhausted_pool_is_quiz_not_found() {
    let state = db_state().await;
    let db = state.db().expect("db");
    let ids = seed_many(db, 2, ART).await;

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let err = next_question(db, CategoryFilter::Only(ART), &ids, &mut rng)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::QuizQuestion, _)));
}
