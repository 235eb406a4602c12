use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create freelancer_profiles table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(FreelancerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FreelancerProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FreelancerProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(FreelancerProfiles::FirstName).string_len(150))
                    .col(ColumnDef::new(FreelancerProfiles::LastName).string_len(150))
                    .col(ColumnDef::new(FreelancerProfiles::Bio).string_len(300))
                    .col(ColumnDef::new(FreelancerProfiles::AboutMe).text())
                    .col(ColumnDef::new(FreelancerProfiles::Location).string_len(255))
                    .col(ColumnDef::new(FreelancerProfiles::ProfilePicUrl).text())
                    .col(
                        ColumnDef::new(FreelancerProfiles::ProfilePicPublicId)
                            .string_len(255),
                    )
                    .col(ColumnDef::new(FreelancerProfiles::ResumeUrl).text())
                    .col(ColumnDef::new(FreelancerProfiles::ResumePublicId).string_len(255))
                    .col(
                        ColumnDef::new(FreelancerProfiles::Provider)
                            .string_len(50)
                            .not_null()
                            .default("password"),
                    )
                    .col(ColumnDef::new(FreelancerProfiles::ProviderUserId).string_len(255))
                    .col(
                        ColumnDef::new(FreelancerProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancer_profiles_user_id")
                            .from(FreelancerProfiles::Table, FreelancerProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create sponsor_profiles table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SponsorProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SponsorProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SponsorProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SponsorProfiles::FirstName).string_len(150))
                    .col(ColumnDef::new(SponsorProfiles::LastName).string_len(150))
                    .col(ColumnDef::new(SponsorProfiles::Bio).string_len(300))
                    .col(ColumnDef::new(SponsorProfiles::ProfilePicUrl).text())
                    .col(ColumnDef::new(SponsorProfiles::ProfilePicPublicId).string_len(255))
                    .col(
                        ColumnDef::new(SponsorProfiles::Provider)
                            .string_len(50)
                            .not_null()
                            .default("password"),
                    )
                    .col(ColumnDef::new(SponsorProfiles::ProviderUserId).string_len(255))
                    .col(
                        ColumnDef::new(SponsorProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sponsor_profiles_user_id")
                            .from(SponsorProfiles::Table, SponsorProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create admin_profiles table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(AdminProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AdminProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AdminProfiles::FirstName).string_len(150))
                    .col(ColumnDef::new(AdminProfiles::LastName).string_len(150))
                    .col(ColumnDef::new(AdminProfiles::Bio).string_len(300))
                    .col(ColumnDef::new(AdminProfiles::ProfilePicUrl).text())
                    .col(ColumnDef::new(AdminProfiles::ProfilePicPublicId).string_len(255))
                    .col(
                        ColumnDef::new(AdminProfiles::Provider)
                            .string_len(50)
                            .not_null()
                            .default("password"),
                    )
                    .col(ColumnDef::new(AdminProfiles::ProviderUserId).string_len(255))
                    .col(
                        ColumnDef::new(AdminProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_profiles_user_id")
                            .from(AdminProfiles::Table, AdminProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Search hits first/last name on every profile listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_freelancer_profiles_names
                ON freelancer_profiles (first_name, last_name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_freelancer_profiles_names")
            .await?;

        manager
            .drop_table(Table::drop().table(AdminProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SponsorProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FreelancerProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FreelancerProfiles {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Bio,
    AboutMe,
    Location,
    ProfilePicUrl,
    ProfilePicPublicId,
    ResumeUrl,
    ResumePublicId,
    Provider,
    ProviderUserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SponsorProfiles {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Bio,
    ProfilePicUrl,
    ProfilePicPublicId,
    Provider,
    ProviderUserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AdminProfiles {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Bio,
    ProfilePicUrl,
    ProfilePicPublicId,
    Provider,
    ProviderUserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
