use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::CreateUser, PackageOwner, User},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleName {
    Tourist,
    ActivityProvider,
    EntryProvider,
    Admin,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Tourist => RoleName::Tourist,
            Role::ActivityProvider => RoleName::ActivityProvider,
            Role::EntryProvider => RoleName::EntryProvider,
            Role::Admin => RoleName::Admin,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Tourist => Role::Tourist,
            RoleName::ActivityProvider => Role::ActivityProvider,
            RoleName::EntryProvider => Role::EntryProvider,
            RoleName::Admin => Role::Admin,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 3))]
    pub username: String,
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
    #[garde(length(min = 1))]
    pub contact_number: String,
    #[garde(skip)]
    pub role: RoleName,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            username,
            first_name,
            last_name,
            email,
            password,
            contact_number,
            role,
        } = value;
        CreateUser {
            username,
            first_name,
            last_name,
            email,
            password,
            contact_number,
            role: role.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuspendUserRequest {
    #[garde(skip)]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub role: RoleName,
    pub is_suspended: bool,
    pub suspension_reason: Option<String>,
    pub suspended_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
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
        Self {
            user_id,
            username,
            first_name,
            last_name,
            email,
            contact_number,
            role: role.into(),
            is_suspended,
            suspension_reason,
            suspended_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(value: Vec<User>) -> Self {
        Self {
            items: value.into_iter().map(UserResponse::from).collect(),
        }
    }
}

/// Provider contact details exposed on bookings and packages.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageOwnerResponse {
    pub owner_id: UserId,
    pub owner_name: String,
    pub contact_number: String,
    pub email: String,
    pub gcash_number: Option<String>,
    pub gcash_name: Option<String>,
}

impl From<PackageOwner> for PackageOwnerResponse {
    fn from(value: PackageOwner) -> Self {
        let PackageOwner {
            owner_id,
            owner_name,
            contact_number,
            email,
            gcash_number,
            gcash_name,
        } = value;
        Self {
            owner_id,
            owner_name,
            contact_number,
            email,
            gcash_number,
            gcash_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in [
            Role::Tourist,
            Role::ActivityProvider,
            Role::EntryProvider,
            Role::Admin,
        ] {
            assert_eq!(Role::from(RoleName::from(role)), role);
        }
    }

    #[test]
    fn create_user_request_rejects_short_password() {
        let req = CreateUserRequest {
            username: "maria".into(),
            first_name: "Maria".into(),
            last_name: "Santos".into(),
            email: "maria@example.com".into(),
            password: "short".into(),
            contact_number: "09171234567".into(),
            role: RoleName::Tourist,
        };
        assert!(req.validate(&()).is_err());
    }
}
