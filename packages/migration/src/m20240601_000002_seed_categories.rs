use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::Query;

use crate::m20240601_000001_init::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Category labels in id order; the store assigns ids 1..=6.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Categories::Table).columns([Categories::Type]);
        for label in DEFAULT_CATEGORIES {
            insert.values_panic([label.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Categories::Table)
            .and_where(Expr::col(Categories::Type).is_in(DEFAULT_CATEGORIES))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
