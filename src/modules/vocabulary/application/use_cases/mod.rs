pub mod create_vocabulary;
pub mod list_vocabulary;

#[cfg(test)]
pub mod mocks;
