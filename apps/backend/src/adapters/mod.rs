//! SeaORM adapters; functions return `DbErr` and repos map it to `DomainError`.

pub mod categories_sea;
pub mod questions_sea;
