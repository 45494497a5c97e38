//! Repository functions for the domain layer.

pub mod categories;
pub mod questions;
