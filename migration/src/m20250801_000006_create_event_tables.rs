use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create events table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Uuid).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Events::Location).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Events::StartsAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Events::Details).text().not_null())
                    .col(ColumnDef::new(Events::Price).decimal_len(10, 2))
                    .col(ColumnDef::new(Events::MaxAttendance).integer())
                    .col(
                        ColumnDef::new(Events::HostProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_host_profile_id")
                            .from(Events::Table, Events::HostProfileId)
                            .to(AdminProfiles::Table, AdminProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create event_attendees table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(EventAttendees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventAttendees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventAttendees::EventUuid).uuid().not_null())
                    .col(
                        ColumnDef::new(EventAttendees::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendees_event_uuid")
                            .from(EventAttendees::Table, EventAttendees::EventUuid)
                            .to(Events::Table, Events::Uuid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendees_user_id")
                            .from(EventAttendees::Table, EventAttendees::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create event_cohosts table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(EventCohosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventCohosts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventCohosts::EventUuid).uuid().not_null())
                    .col(ColumnDef::new(EventCohosts::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_cohosts_event_uuid")
                            .from(EventCohosts::Table, EventCohosts::EventUuid)
                            .to(Events::Table, Events::Uuid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_cohosts_user_id")
                            .from(EventCohosts::Table, EventCohosts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One RSVP / one cohost slot per user per event
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_event_attendees_pair
                ON event_attendees (event_uuid, user_id);
                CREATE UNIQUE INDEX idx_event_cohosts_pair
                ON event_cohosts (event_uuid, user_id);
                "#,
            )
            .await?;

        // Default listing order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_events_starts_at
                ON events (starts_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventCohosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EventAttendees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Uuid,
    Name,
    Location,
    StartsAt,
    Details,
    Price,
    MaxAttendance,
    HostProfileId,
}

#[derive(DeriveIden)]
enum EventAttendees {
    Table,
    Id,
    EventUuid,
    UserId,
}

#[derive(DeriveIden)]
enum EventCohosts {
    Table,
    Id,
    EventUuid,
    UserId,
}

#[derive(DeriveIden)]
enum AdminProfiles {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
