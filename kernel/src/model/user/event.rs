use derive_new::new;

use crate::model::{id::UserId, role::Role};

#[derive(new)]
pub struct CreateUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
    pub role: Role,
}

#[derive(new)]
pub struct SuspendUser {
    pub user_id: UserId,
    pub suspended_by: UserId,
    pub reason: Option<String>,
}

#[derive(new)]
pub struct UnsuspendUser {
    pub user_id: UserId,
}
