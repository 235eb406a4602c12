use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create freelancer_links table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(FreelancerLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FreelancerLinks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FreelancerLinks::ProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FreelancerLinks::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(FreelancerLinks::Icon).text())
                    .col(ColumnDef::new(FreelancerLinks::Url).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancer_links_profile_id")
                            .from(FreelancerLinks::Table, FreelancerLinks::ProfileId)
                            .to(FreelancerProfiles::Table, FreelancerProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::ProfileId).big_integer().not_null())
                    .col(ColumnDef::new(Projects::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Projects::Url).text().not_null())
                    .col(ColumnDef::new(Projects::Skills).text())
                    .col(ColumnDef::new(Projects::Tools).text())
                    .col(ColumnDef::new(Projects::Description).text())
                    .col(ColumnDef::new(Projects::CoverImageUrl).text())
                    .col(ColumnDef::new(Projects::CoverImagePublicId).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_profile_id")
                            .from(Projects::Table, Projects::ProfileId)
                            .to(FreelancerProfiles::Table, FreelancerProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create work_experiences table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(WorkExperiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkExperiences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::ProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::JobTitle)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Company)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkExperiences::CompanyUrl).text())
                    .col(ColumnDef::new(WorkExperiences::StartDate).date().not_null())
                    .col(ColumnDef::new(WorkExperiences::EndDate).date())
                    .col(ColumnDef::new(WorkExperiences::Description).text().not_null())
                    .col(
                        ColumnDef::new(WorkExperiences::CurrentRole)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_experiences_profile_id")
                            .from(WorkExperiences::Table, WorkExperiences::ProfileId)
                            .to(FreelancerProfiles::Table, FreelancerProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Timeline listings sort on start_date
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_work_experiences_start_date
                ON work_experiences (profile_id, start_date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_work_experiences_start_date")
            .await?;

        manager
            .drop_table(Table::drop().table(WorkExperiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FreelancerLinks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FreelancerLinks {
    Table,
    Id,
    ProfileId,
    Name,
    Icon,
    Url,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    ProfileId,
    Name,
    Url,
    Skills,
    Tools,
    Description,
    CoverImageUrl,
    CoverImagePublicId,
}

#[derive(DeriveIden)]
enum WorkExperiences {
    Table,
    Id,
    ProfileId,
    JobTitle,
    Company,
    CompanyUrl,
    StartDate,
    EndDate,
    Description,
    CurrentRole,
}

#[derive(DeriveIden)]
enum FreelancerProfiles {
    Table,
    Id,
}
