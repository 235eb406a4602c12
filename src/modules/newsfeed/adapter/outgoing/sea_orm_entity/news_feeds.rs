use sea_orm::entity::prelude::*;

use crate::modules::newsfeed::application::domain::entities::NewsFeedItem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news_feeds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for NewsFeedItem {
    fn from(model: Model) -> Self {
        NewsFeedItem {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
