use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{PackageId, ReviewId, UserId},
    review::{
        event::{CreateReview, DeleteReview, ReviewListFilter, UpdateReview},
        PackageReviews, UserReview,
    },
};

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a review for a completed booking owned by the caller.
    /// Exactly one review per booking; a second attempt is a conflict.
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId>;

    /// Partial update of the caller's own review.
    async fn update(&self, event: UpdateReview) -> AppResult<()>;

    async fn delete(&self, event: DeleteReview) -> AppResult<()>;

    /// Public listing for one package plus its rating aggregate, optionally
    /// filtered to a single star value.
    async fn find_for_package(
        &self,
        package_id: PackageId,
        filter: ReviewListFilter,
    ) -> AppResult<PackageReviews>;

    /// Everything the user has written, joined with package identity.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<UserReview>>;
}
