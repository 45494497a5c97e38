use sea_orm::ConnectionTrait;

use crate::errors::domain::DomainError;
use crate::repos::categories::{self, Category};

/// Every category, ordered by id.
pub async fn list_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Category>, DomainError> {
    categories::list_by_id(conn).await
}
