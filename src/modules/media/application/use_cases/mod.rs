pub mod manage_media;

#[cfg(test)]
pub mod mocks;
