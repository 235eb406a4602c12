pub mod news_feeds;
