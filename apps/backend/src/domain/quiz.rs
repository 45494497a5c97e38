//! Quiz play: choose an unseen question from the requested category.
//!
//! A question is a candidate when its category matches the filter and its id
//! is not among the previously asked ones. Each candidate is counted once and
//! the pick is uniform over the candidates.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

/// What quiz selection needs to know about a question.
pub trait QuizItem {
    fn id(&self) -> i32;
    fn category(&self) -> i32;
}

/// Category restriction for a quiz round. Id 0 means every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(i32),
}

impl CategoryFilter {
    pub const ALL_CATEGORIES_ID: i32 = 0;

    pub fn from_id(id: i32) -> Self {
        if id == Self::ALL_CATEGORIES_ID {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }

    pub fn matches(self, category: i32) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => id == category,
        }
    }
}

/// Questions still eligible, in pool order.
pub fn candidates<'a, T: QuizItem>(
    pool: &'a [T],
    filter: CategoryFilter,
    previous: &[i32],
) -> Vec<&'a T> {
    let asked: HashSet<i32> = previous.iter().copied().collect();
    pool.iter()
        .filter(|q| filter.matches(q.category()) && !asked.contains(&q.id()))
        .collect()
}

/// Pick one candidate uniformly; `None` once the category is exhausted.
pub fn pick_question<'a, T: QuizItem, R: Rng + ?Sized>(
    pool: &'a [T],
    filter: CategoryFilter,
    previous: &[i32],
    rng: &mut R,
) -> Option<&'a T> {
    candidates(pool, filter, previous).choose(rng).copied()
}
