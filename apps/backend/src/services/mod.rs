//! Services orchestrate repos and pure domain logic for the route handlers.

pub mod categories;
pub mod questions;
pub mod quizzes;
