pub mod google_login;

#[cfg(test)]
pub mod mocks;
