use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::{Event, EventDetail, EventMember};
use crate::modules::event::application::ports::outgoing::event_query::{
    EventListFilter, EventQuery, EventQueryError,
};
use crate::modules::event::application::ports::outgoing::event_repository::{
    EventChanges, EventRepository, EventRepositoryError, NewEvent,
};
use crate::modules::event::application::ports::outgoing::membership_repository::{
    MembershipRepository, MembershipRepositoryError,
};
use crate::modules::profile::application::domain::entities::BasicProfile;

pub fn sample_event(uuid: Uuid, host_profile_id: i64) -> Event {
    Event {
        uuid,
        name: "RustConf".to_string(),
        location: "Portland".to_string(),
        starts_at: "2026-09-01T18:00:00+00:00".parse().unwrap(),
        details: "Talks".to_string(),
        price: None,
        max_attendance: Some(200),
        host_profile_id,
    }
}

pub fn sample_member(uuid: Uuid) -> EventMember {
    EventMember {
        uuid,
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
    }
}

#[derive(Default)]
pub struct MockEventQuery {
    pub events: Vec<Event>,
    pub attendees: Vec<EventMember>,
    pub fail: bool,
}

impl MockEventQuery {
    pub fn with_event(event: Event) -> Self {
        Self {
            events: vec![event],
            ..Self::default()
        }
    }

    fn guard(&self) -> Result<(), EventQueryError> {
        if self.fail {
            Err(EventQueryError::DatabaseError("boom".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EventQuery for MockEventQuery {
    async fn list(&self, _filter: EventListFilter) -> Result<Vec<Event>, EventQueryError> {
        self.guard()?;
        Ok(self.events.clone())
    }

    async fn find_detail(&self, event_uuid: Uuid) -> Result<Option<EventDetail>, EventQueryError> {
        self.guard()?;
        Ok(self
            .events
            .iter()
            .find(|e| e.uuid == event_uuid)
            .map(|e| EventDetail {
                event: e.clone(),
                host: BasicProfile {
                    id: e.host_profile_id,
                    uuid: Uuid::new_v4(),
                    username: "root".to_string(),
                    email: "root@example.com".to_string(),
                    first_name: None,
                    last_name: None,
                    bio: None,
                    profile_pic_url: None,
                },
                cohosts: vec![],
                attendee_count: self.attendees.len() as u64,
            }))
    }

    async fn host_profile_id(&self, event_uuid: Uuid) -> Result<Option<i64>, EventQueryError> {
        self.guard()?;
        Ok(self
            .events
            .iter()
            .find(|e| e.uuid == event_uuid)
            .map(|e| e.host_profile_id))
    }

    async fn list_attendees(
        &self,
        _event_uuid: Uuid,
        _search: Option<String>,
    ) -> Result<Vec<EventMember>, EventQueryError> {
        self.guard()?;
        Ok(self.attendees.clone())
    }
}

#[derive(Default)]
pub struct MockEventRepository {
    pub missing: bool,
    pub fail: bool,
    pub created: Mutex<Vec<(i64, String)>>,
    pub deleted: Mutex<Vec<Uuid>>,
}

impl MockEventRepository {
    fn guard(&self) -> Result<(), EventRepositoryError> {
        if self.fail {
            Err(EventRepositoryError::DatabaseError("boom".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EventRepository for MockEventRepository {
    async fn create(
        &self,
        host_profile_id: i64,
        event: NewEvent,
    ) -> Result<Event, EventRepositoryError> {
        self.guard()?;
        self.created
            .lock()
            .unwrap()
            .push((host_profile_id, event.name.clone()));
        Ok(Event {
            uuid: Uuid::new_v4(),
            name: event.name,
            location: event.location,
            starts_at: event.starts_at,
            details: event.details,
            price: event.price,
            max_attendance: event.max_attendance,
            host_profile_id,
        })
    }

    async fn update(
        &self,
        event_uuid: Uuid,
        changes: EventChanges,
    ) -> Result<Event, EventRepositoryError> {
        self.guard()?;
        if self.missing {
            return Err(EventRepositoryError::NotFound);
        }
        let mut event = sample_event(event_uuid, 11);
        if let Some(name) = changes.name {
            event.name = name;
        }
        if let Some(location) = changes.location {
            event.location = location;
        }
        Ok(event)
    }

    async fn delete(&self, event_uuid: Uuid) -> Result<(), EventRepositoryError> {
        self.guard()?;
        if self.missing {
            return Err(EventRepositoryError::NotFound);
        }
        self.deleted.lock().unwrap().push(event_uuid);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockMembershipRepository {
    pub duplicate: bool,
    pub not_member: bool,
    pub fail: bool,
    pub added: Mutex<Vec<(Uuid, Uuid)>>,
    pub removed: Mutex<Vec<(Uuid, Uuid)>>,
}

impl MockMembershipRepository {
    fn guard(&self) -> Result<(), MembershipRepositoryError> {
        if self.fail {
            Err(MembershipRepositoryError::DatabaseError("boom".to_string()))
        } else {
            Ok(())
        }
    }

    fn add(&self, event_uuid: Uuid, user_uuid: Uuid) -> Result<EventMember, MembershipRepositoryError> {
        self.guard()?;
        if self.duplicate {
            return Err(MembershipRepositoryError::Duplicate);
        }
        self.added.lock().unwrap().push((event_uuid, user_uuid));
        Ok(sample_member(user_uuid))
    }

    fn remove(&self, event_uuid: Uuid, user_uuid: Uuid) -> Result<(), MembershipRepositoryError> {
        self.guard()?;
        if self.not_member {
            return Err(MembershipRepositoryError::NotMember);
        }
        self.removed.lock().unwrap().push((event_uuid, user_uuid));
        Ok(())
    }
}

#[async_trait]
impl MembershipRepository for MockMembershipRepository {
    async fn add_attendee(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<EventMember, MembershipRepositoryError> {
        self.add(event_uuid, user_uuid)
    }

    async fn remove_attendee(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<(), MembershipRepositoryError> {
        self.remove(event_uuid, user_uuid)
    }

    async fn add_cohost(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<EventMember, MembershipRepositoryError> {
        self.add(event_uuid, user_uuid)
    }

    async fn remove_cohost(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<(), MembershipRepositoryError> {
        self.remove(event_uuid, user_uuid)
    }
}
