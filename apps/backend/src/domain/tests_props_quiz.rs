//! Property tests for quiz selection (pure domain, no DB).

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::quiz::{candidates, pick_question, CategoryFilter, QuizItem};
use crate::domain::test_prelude;

#[derive(Debug, Clone)]
struct Item {
    id: i32,
    category: i32,
}

impl QuizItem for Item {
    fn id(&self) -> i32 {
        self.id
    }
    fn category(&self) -> i32 {
        self.category
    }
}

fn pool_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(1i32..=6, 0..40).prop_map(|cats| {
        cats.into_iter()
            .enumerate()
            .map(|(i, category)| Item {
                id: i as i32 + 1,
                category,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a picked question matches the category and was never asked.
    #[test]
    fn prop_pick_respects_category_and_history(
        pool in pool_strategy(),
        category in 0i32..=6,
        previous in prop::collection::vec(1i32..=40, 0..20),
        seed in any::<u64>(),
    ) {
        let filter = CategoryFilter::from_id(category);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        match pick_question(&pool, filter, &previous, &mut rng) {
            Some(q) => {
                prop_assert!(filter.matches(q.category));
                prop_assert!(!previous.contains(&q.id));
            }
            None => {
                prop_assert!(candidates(&pool, filter, &previous).is_empty());
            }
        }
    }

    /// Property: candidates never repeat an id.
    #[test]
    fn prop_candidates_are_distinct(
        pool in pool_strategy(),
        previous in prop::collection::vec(1i32..=40, 0..20),
    ) {
        let found = candidates(&pool, CategoryFilter::All, &previous);
        let mut ids: Vec<i32> = found.iter().map(|q| q.id).collect();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
    }
}
