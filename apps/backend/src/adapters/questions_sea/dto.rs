//! DTOs for questions_sea adapter.

/// DTO for inserting a question; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCreate {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
