use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

pub const MAX_TITLE_LEN: usize = 200;

/// An authorless feed item; mutations are admin-gated at the edge.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NewsFeedItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDate,
}
