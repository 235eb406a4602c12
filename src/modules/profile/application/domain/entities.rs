use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;

/// One row of a reference vocabulary (niche, skill or language).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VocabItem {
    pub id: i64,
    #[schema(example = "Rust")]
    pub name: String,
}

/// Which vocabulary an attachment operation targets. Only niches carry
/// the per-freelancer cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabKind {
    Niche,
    Skill,
    Language,
}

impl VocabKind {
    /// Singular noun as it appears in per-id error messages.
    pub fn noun(&self) -> &'static str {
        match self {
            VocabKind::Niche => "Niche",
            VocabKind::Skill => "Skill",
            VocabKind::Language => "Language",
        }
    }
}

pub const MAX_NICHES_PER_FREELANCER: u64 = 3;

/// External link on a freelancer profile.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileLink {
    pub id: i64,
    #[serde(skip_serializing)]
    pub profile_id: i64,
    #[schema(example = "GitHub")]
    pub name: String,
    pub icon: Option<String>,
    pub url: String,
}

/// Portfolio project on a freelancer profile.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortfolioProject {
    pub id: i64,
    #[serde(skip_serializing)]
    pub profile_id: i64,
    pub name: String,
    pub url: String,
    pub skills: Option<String>,
    pub tools: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing)]
    pub cover_image_public_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WorkExperience {
    pub id: i64,
    #[serde(skip_serializing)]
    pub profile_id: i64,
    pub job_title: String,
    pub company: String,
    pub company_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub current_role: bool,
}

/// Freelancer profile joined with its user row. The profile is keyed
/// externally by the owning user's uuid.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FreelancerProfile {
    #[serde(skip_serializing)]
    pub id: i64,
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub about_me: Option<String>,
    pub location: Option<String>,
    pub profile_pic_url: Option<String>,
    pub resume_url: Option<String>,
}

/// Freelancer profile with its nested collections, as the detail
/// endpoint returns it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FreelancerProfileDetail {
    #[serde(flatten)]
    pub profile: FreelancerProfile,
    pub niches: Vec<VocabItem>,
    pub skills: Vec<VocabItem>,
    pub languages: Vec<VocabItem>,
    pub links: Vec<ProfileLink>,
}

/// Sponsor and admin profiles share a column set.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BasicProfile {
    #[serde(skip_serializing)]
    pub id: i64,
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_pic_url: Option<String>,
}

/// One profile row per user, in the table matching the user's role.
#[derive(Debug, Clone)]
pub enum Profile {
    Freelancer(FreelancerProfile),
    Sponsor(BasicProfile),
    Admin(BasicProfile),
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::Freelancer(_) => Role::Freelancer,
            Profile::Sponsor(_) => Role::Sponsor,
            Profile::Admin(_) => Role::Admin,
        }
    }
}

/// Scalar fields a freelancer may change on their own profile.
#[derive(Debug, Clone, Default, serde::Deserialize, ToSchema)]
pub struct FreelancerProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub about_me: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize, ToSchema)]
pub struct BasicProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocab_kind_nouns_match_error_wording() {
        assert_eq!(VocabKind::Niche.noun(), "Niche");
        assert_eq!(VocabKind::Skill.noun(), "Skill");
        assert_eq!(VocabKind::Language.noun(), "Language");
    }

    #[test]
    fn profile_detail_serializes_flat() {
        let detail = FreelancerProfileDetail {
            profile: FreelancerProfile {
                id: 1,
                uuid: Uuid::new_v4(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                first_name: None,
                last_name: None,
                bio: None,
                about_me: None,
                location: None,
                profile_pic_url: None,
                resume_url: None,
            },
            niches: vec![],
            skills: vec![],
            languages: vec![],
            links: vec![],
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["username"], "ada");
        assert!(value.get("id").is_none());
        assert!(value["niches"].as_array().unwrap().is_empty());
    }
}
