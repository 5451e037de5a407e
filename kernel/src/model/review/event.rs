use derive_new::new;

use crate::model::id::{BookingId, ReviewId, UserId};

#[derive(new)]
pub struct CreateReview {
    pub booking_id: BookingId,
    pub requested_user: UserId,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Explicit patch over the two mutable review fields. Absent fields keep
/// their stored value.
#[derive(Debug, Default)]
pub struct ReviewPatch {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl ReviewPatch {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.comment.is_none()
    }
}

#[derive(new)]
pub struct UpdateReview {
    pub review_id: ReviewId,
    pub requested_user: UserId,
    pub patch: ReviewPatch,
}

#[derive(new)]
pub struct DeleteReview {
    pub review_id: ReviewId,
    pub requested_user: UserId,
}

/// Optional filters for the public per-package review listing.
#[derive(Debug, Default)]
pub struct ReviewListFilter {
    pub rating: Option<i32>,
}
