use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [Vocab::Niches, Vocab::Skills, Vocab::Languages] {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Vocab::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Vocab::Name)
                                .string_len(255)
                                .not_null()
                                .unique_key(),
                        )
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [Vocab::Languages, Vocab::Skills, Vocab::Niches] {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}

// The three reference vocabularies share one shape.
#[derive(DeriveIden, Clone, Copy)]
enum Vocab {
    Niches,
    Skills,
    Languages,
    Id,
    Name,
}
