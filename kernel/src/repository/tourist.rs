use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{TouristId, UserId},
    tourist::{event::RegisterTourist, Tourist},
};

#[async_trait]
pub trait TouristRepository: Send + Sync {
    async fn create(&self, event: RegisterTourist) -> AppResult<TouristId>;

    /// The profile gate for booking creation: `None` means the user must
    /// complete their profile first.
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Tourist>>;
}
