use chrono::{DateTime, Utc};
use sqlx::FromRow;

use kernel::model::{id::UserId, role::Role, user::User};

#[derive(FromRow)]
pub struct UserRow {
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

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            username,
            first_name,
            last_name,
            email,
            contact_number,
            role,
            is_suspended,
            suspension_reason,
            suspended_at,
        } = value;
        User {
            user_id,
            username,
            first_name,
            last_name,
            email,
            contact_number,
            role,
            is_suspended,
            suspension_reason,
            suspended_at,
        }
    }
}
