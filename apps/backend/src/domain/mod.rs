//! Domain layer: pure pagination and quiz selection logic (no DB, no HTTP).

pub mod pagination;
pub mod quiz;

pub use pagination::{paginate, PageNumber, QUESTIONS_PER_PAGE};
pub use quiz::{pick_question, CategoryFilter, QuizItem};

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_quiz;
