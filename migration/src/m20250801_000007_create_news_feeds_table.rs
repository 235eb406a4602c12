use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsFeeds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NewsFeeds::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NewsFeeds::Title).string_len(200).not_null())
                    .col(ColumnDef::new(NewsFeeds::Content).text().not_null())
                    .col(
                        ColumnDef::new(NewsFeeds::CreatedAt)
                            .date()
                            .not_null()
                            .default(Expr::cust("CURRENT_DATE")),
                    )
                    .to_owned(),
            )
            .await?;

        // Feed reads newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_news_feeds_created_at
                ON news_feeds (created_at DESC, id DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsFeeds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NewsFeeds {
    Table,
    Id,
    Title,
    Content,
    CreatedAt,
}
