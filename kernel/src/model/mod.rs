pub mod booking;
pub mod id;
pub mod package;
pub mod review;
pub mod role;
pub mod stats;
pub mod tourist;
pub mod user;
