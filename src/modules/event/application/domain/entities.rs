use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::BasicProfile;

/// An event hosted by an admin profile. The uuid is the primary key and
/// is generated server-side at creation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Event {
    pub uuid: Uuid,
    pub name: String,
    pub location: String,
    pub starts_at: DateTime<FixedOffset>,
    pub details: String,
    pub price: Option<Decimal>,
    pub max_attendance: Option<i32>,
    #[serde(skip_serializing)]
    pub host_profile_id: i64,
}

/// A user attending or co-hosting an event.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventMember {
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub host: BasicProfile,
    pub cohosts: Vec<EventMember>,
    pub attendee_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_serializes_flat_with_host_and_count() {
        let detail = EventDetail {
            event: Event {
                uuid: Uuid::new_v4(),
                name: "RustConf".to_string(),
                location: "Portland".to_string(),
                starts_at: "2026-09-01T18:00:00+00:00".parse().unwrap(),
                details: "Talks".to_string(),
                price: None,
                max_attendance: Some(200),
                host_profile_id: 11,
            },
            host: BasicProfile {
                id: 11,
                uuid: Uuid::new_v4(),
                username: "root".to_string(),
                email: "root@example.com".to_string(),
                first_name: None,
                last_name: None,
                bio: None,
                profile_pic_url: None,
            },
            cohosts: vec![],
            attendee_count: 42,
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "RustConf");
        assert_eq!(json["attendee_count"], 42);
        assert_eq!(json["host"]["username"], "root");
        assert!(json.get("host_profile_id").is_none());
    }
}
