use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PasswordOtps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PasswordOtps::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PasswordOtps::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PasswordOtps::Code).string_len(6).not_null())
                    .col(
                        ColumnDef::new(PasswordOtps::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Each request deletes the previous OTP for the email first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_password_otps_email
                ON password_otps (email);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PasswordOtps::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PasswordOtps {
    Table,
    Id,
    Email,
    Code,
    ExpiresAt,
}
