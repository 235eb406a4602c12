pub mod newsfeed_repository;
