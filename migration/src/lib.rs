pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_users_table;
mod m20250801_000002_create_profile_tables;
mod m20250801_000003_create_vocabulary_tables;
mod m20250801_000004_create_profile_vocabulary_links;
mod m20250801_000005_create_portfolio_tables;
mod m20250801_000006_create_event_tables;
mod m20250801_000007_create_news_feeds_table;
mod m20250801_000008_create_password_otps_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_users_table::Migration),
            Box::new(m20250801_000002_create_profile_tables::Migration),
            Box::new(m20250801_000003_create_vocabulary_tables::Migration),
            Box::new(m20250801_000004_create_profile_vocabulary_links::Migration),
            Box::new(m20250801_000005_create_portfolio_tables::Migration),
            Box::new(m20250801_000006_create_event_tables::Migration),
            Box::new(m20250801_000007_create_news_feeds_table::Migration),
            Box::new(m20250801_000008_create_password_otps_table::Migration),
        ]
    }
}
