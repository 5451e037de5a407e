pub mod booking;
pub mod health;
#[cfg(test)]
pub(crate) mod test_support;
pub mod package;
pub mod review;
pub mod stats;
pub mod tourist;
pub mod user;
