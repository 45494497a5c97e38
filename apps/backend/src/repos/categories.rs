//! Category repository functions for domain layer.

use std::collections::BTreeMap;

use sea_orm::ConnectionTrait;

use crate::adapters::categories_sea as categories_adapter;
use crate::entities::categories;
use crate::errors::domain::DomainError;

/// Category domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub kind: String,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            kind: model.kind,
        }
    }
}

/// All categories ordered by id.
pub async fn list_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Category>, DomainError> {
    let models = categories_adapter::find_all_by_id(conn).await?;
    Ok(models.into_iter().map(Category::from).collect())
}

/// All categories ordered by display label.
pub async fn list_by_kind<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Category>, DomainError> {
    let models = categories_adapter::find_all_by_kind(conn).await?;
    Ok(models.into_iter().map(Category::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i32,
) -> Result<Option<Category>, DomainError> {
    let model = categories_adapter::find_by_id(conn, category_id).await?;
    Ok(model.map(Category::from))
}

/// id -> label lookup used by listing responses.
pub fn label_map(categories: &[Category]) -> BTreeMap<i32, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
