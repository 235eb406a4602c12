use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::event::application::domain::entities::{Event, EventDetail, EventMember};
use crate::modules::event::application::ports::outgoing::event_query::{
    EventListFilter, EventOrdering, EventQuery, EventQueryError,
};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::admin_profiles;
use crate::modules::profile::application::domain::entities::BasicProfile;

use super::sea_orm_entity::{event_attendees, event_cohosts, events};

#[derive(Clone, Debug)]
pub struct EventQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: sea_orm::DbErr) -> EventQueryError {
        EventQueryError::DatabaseError(e.to_string())
    }

    fn member_from(user: users::Model) -> EventMember {
        EventMember {
            uuid: user.uuid,
            username: user.username,
            email: user.email,
        }
    }

    async fn host_profile(&self, host_profile_id: i64) -> Result<Option<BasicProfile>, EventQueryError> {
        let row = admin_profiles::Entity::find_by_id(host_profile_id)
            .find_also_related(users::Entity)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?;
        Ok(row.and_then(|(profile, user)| {
            user.map(|user| BasicProfile {
                id: profile.id,
                uuid: user.uuid,
                username: user.username,
                email: user.email,
                first_name: profile.first_name,
                last_name: profile.last_name,
                bio: profile.bio,
                profile_pic_url: profile.profile_pic_url,
            })
        }))
    }
}

#[async_trait]
impl EventQuery for EventQueryPostgres {
    async fn list(&self, filter: EventListFilter) -> Result<Vec<Event>, EventQueryError> {
        let mut query = events::Entity::find();

        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(events::Column::Name.contains(term))
                    .add(events::Column::Location.contains(term)),
            );
        }

        let (column, order) = match filter.ordering {
            EventOrdering::StartsAtAsc => (events::Column::StartsAt, Order::Asc),
            EventOrdering::StartsAtDesc => (events::Column::StartsAt, Order::Desc),
            EventOrdering::NameAsc => (events::Column::Name, Order::Asc),
            EventOrdering::NameDesc => (events::Column::Name, Order::Desc),
            EventOrdering::LocationAsc => (events::Column::Location, Order::Asc),
            EventOrdering::LocationDesc => (events::Column::Location, Order::Desc),
        };

        let rows = query
            .order_by(column, order)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_detail(&self, event_uuid: Uuid) -> Result<Option<EventDetail>, EventQueryError> {
        let event = match events::Entity::find_by_id(event_uuid)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
        {
            Some(row) => row,
            None => return Ok(None),
        };

        let host = match self.host_profile(event.host_profile_id).await? {
            Some(profile) => profile,
            // A dangling host FK would have been caught by the schema.
            None => return Ok(None),
        };

        let cohosts = event_cohosts::Entity::find()
            .filter(event_cohosts::Column::EventUuid.eq(event_uuid))
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?
            .into_iter()
            .filter_map(|(_, user)| user.map(Self::member_from))
            .collect();

        let attendee_count = event_attendees::Entity::find()
            .filter(event_attendees::Column::EventUuid.eq(event_uuid))
            .count(&*self.db)
            .await
            .map_err(Self::db_err)?;

        Ok(Some(EventDetail {
            event: event.into(),
            host,
            cohosts,
            attendee_count,
        }))
    }

    async fn host_profile_id(&self, event_uuid: Uuid) -> Result<Option<i64>, EventQueryError> {
        events::Entity::find_by_id(event_uuid)
            .select_only()
            .column(events::Column::HostProfileId)
            .into_tuple::<i64>()
            .one(&*self.db)
            .await
            .map_err(Self::db_err)
    }

    async fn list_attendees(
        &self,
        event_uuid: Uuid,
        search: Option<String>,
    ) -> Result<Vec<EventMember>, EventQueryError> {
        let mut query = event_attendees::Entity::find()
            .filter(event_attendees::Column::EventUuid.eq(event_uuid));

        if let Some(term) = search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(users::Column::Username.contains(term))
                    .add(users::Column::Email.contains(term)),
            );
        }

        let rows = query
            .find_also_related(users::Entity)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, user)| user.map(Self::member_from))
            .collect())
    }
}
