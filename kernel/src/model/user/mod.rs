use chrono::{DateTime, Utc};

use crate::model::{id::UserId, role::Role};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub role: Role,
    pub is_suspended: bool,
    pub suspension_reason: Option<String>,
    pub suspended_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The provider who owns a package, as seen from booking/review listings.
#[derive(Debug, Clone)]
pub struct PackageOwner {
    pub owner_id: UserId,
    pub owner_name: String,
    pub contact_number: String,
    pub email: String,
    pub gcash_number: Option<String>,
    pub gcash_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Reviewer {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
}
