use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create freelancer_niches table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(FreelancerNiches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FreelancerNiches::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FreelancerNiches::ProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FreelancerNiches::NicheId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancer_niches_profile_id")
                            .from(FreelancerNiches::Table, FreelancerNiches::ProfileId)
                            .to(FreelancerProfiles::Table, FreelancerProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancer_niches_niche_id")
                            .from(FreelancerNiches::Table, FreelancerNiches::NicheId)
                            .to(Niches::Table, Niches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create freelancer_skills table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(FreelancerSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FreelancerSkills::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FreelancerSkills::ProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FreelancerSkills::SkillId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancer_skills_profile_id")
                            .from(FreelancerSkills::Table, FreelancerSkills::ProfileId)
                            .to(FreelancerProfiles::Table, FreelancerProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancer_skills_skill_id")
                            .from(FreelancerSkills::Table, FreelancerSkills::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create freelancer_languages table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(FreelancerLanguages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FreelancerLanguages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FreelancerLanguages::ProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FreelancerLanguages::LanguageId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancer_languages_profile_id")
                            .from(
                                FreelancerLanguages::Table,
                                FreelancerLanguages::ProfileId,
                            )
                            .to(FreelancerProfiles::Table, FreelancerProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_freelancer_languages_language_id")
                            .from(
                                FreelancerLanguages::Table,
                                FreelancerLanguages::LanguageId,
                            )
                            .to(Languages::Table, Languages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Unique pairs
        // =====================================================

        // Attach is an upsert; the unique pair is what it lands on.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_freelancer_niches_pair
                ON freelancer_niches (profile_id, niche_id);
                CREATE UNIQUE INDEX idx_freelancer_skills_pair
                ON freelancer_skills (profile_id, skill_id);
                CREATE UNIQUE INDEX idx_freelancer_languages_pair
                ON freelancer_languages (profile_id, language_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FreelancerLanguages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FreelancerSkills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FreelancerNiches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FreelancerNiches {
    Table,
    Id,
    ProfileId,
    NicheId,
}

#[derive(DeriveIden)]
enum FreelancerSkills {
    Table,
    Id,
    ProfileId,
    SkillId,
}

#[derive(DeriveIden)]
enum FreelancerLanguages {
    Table,
    Id,
    ProfileId,
    LanguageId,
}

#[derive(DeriveIden)]
enum FreelancerProfiles {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Niches {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Languages {
    Table,
    Id,
}
