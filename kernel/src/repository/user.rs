use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, SuspendUser, UnsuspendUser},
        User,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Registration. A duplicate email is a conflict.
    async fn create(&self, event: CreateUser) -> AppResult<User>;

    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Admin listing.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn suspend(&self, event: SuspendUser) -> AppResult<()>;

    async fn unsuspend(&self, event: UnsuspendUser) -> AppResult<()>;
}
