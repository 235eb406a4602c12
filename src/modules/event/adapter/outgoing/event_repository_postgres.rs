use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, ModelTrait};
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::outgoing::event_repository::{
    EventChanges, EventRepository, EventRepositoryError, NewEvent,
};

use super::sea_orm_entity::events;

#[derive(Clone, Debug)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: sea_orm::DbErr) -> EventRepositoryError {
        EventRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn create(
        &self,
        host_profile_id: i64,
        event: NewEvent,
    ) -> Result<Event, EventRepositoryError> {
        let row = events::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            name: Set(event.name),
            location: Set(event.location),
            starts_at: Set(event.starts_at),
            details: Set(event.details),
            price: Set(event.price),
            max_attendance: Set(event.max_attendance),
            host_profile_id: Set(host_profile_id),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::db_err)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        event_uuid: Uuid,
        changes: EventChanges,
    ) -> Result<Event, EventRepositoryError> {
        let existing = events::Entity::find_by_id(event_uuid)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(EventRepositoryError::NotFound)?;

        let mut active: events::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(location) = changes.location {
            active.location = Set(location);
        }
        if let Some(starts_at) = changes.starts_at {
            active.starts_at = Set(starts_at);
        }
        if let Some(details) = changes.details {
            active.details = Set(details);
        }
        if let Some(price) = changes.price {
            active.price = Set(Some(price));
        }
        if let Some(max_attendance) = changes.max_attendance {
            active.max_attendance = Set(Some(max_attendance));
        }

        let row = active.update(&*self.db).await.map_err(Self::db_err)?;
        Ok(row.into())
    }

    async fn delete(&self, event_uuid: Uuid) -> Result<(), EventRepositoryError> {
        let existing = events::Entity::find_by_id(event_uuid)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(EventRepositoryError::NotFound)?;
        existing.delete(&*self.db).await.map_err(Self::db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn row(uuid: Uuid, name: &str) -> events::Model {
        events::Model {
            uuid,
            name: name.to_string(),
            location: "Portland".to_string(),
            starts_at: "2026-09-01T18:00:00+00:00".parse().unwrap(),
            details: "Talks".to_string(),
            price: None,
            max_attendance: None,
            host_profile_id: 11,
        }
    }

    #[tokio::test]
    async fn creates_with_a_fresh_uuid() {
        let uuid = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(uuid, "RustConf")]])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let event = repo
            .create(
                11,
                NewEvent {
                    name: "RustConf".to_string(),
                    location: "Portland".to_string(),
                    starts_at: "2026-09-01T18:00:00+00:00".parse().unwrap(),
                    details: "Talks".to_string(),
                    price: None,
                    max_attendance: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(event.host_profile_id, 11);
    }

    #[tokio::test]
    async fn partial_update_keeps_untouched_columns() {
        let uuid = Uuid::new_v4();
        let mut updated = row(uuid, "RustWeek");
        updated.location = "Portland".to_string();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(uuid, "RustConf")], vec![updated]])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let event = repo
            .update(
                uuid,
                EventChanges {
                    name: Some("RustWeek".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(event.name, "RustWeek");
        assert_eq!(event.location, "Portland");
    }

    #[tokio::test]
    async fn updating_an_unknown_event_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<events::Model>::new()])
            .into_connection();

        let repo = EventRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .update(Uuid::new_v4(), EventChanges::default())
            .await
            .unwrap_err();

        assert!(matches!(err, EventRepositoryError::NotFound));
    }
}
