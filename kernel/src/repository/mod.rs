pub mod booking;
pub mod health;
pub mod package;
pub mod review;
pub mod stats;
pub mod tourist;
pub mod user;
