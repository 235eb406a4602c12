pub mod manage_newsfeed;

#[cfg(test)]
pub mod mocks;
