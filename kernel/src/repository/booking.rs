use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{
            CancelBooking, CreateBooking, MarkRefundProcessed, ReactivateBooking,
            UpdateBookingStatus,
        },
        Booking, BookingStatus, BookingWithReview,
    },
    id::{BookingId, UserId},
};

/// What the caller gets back from a successful booking creation.
#[derive(Debug)]
pub struct CreatedBooking {
    pub booking_id: BookingId,
    pub booking_reference: String,
    pub payment_reference: Option<String>,
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a new `pending` booking with generated references. Fails when
    /// the tourist profile is missing, the package does not exist, or the
    /// participant count exceeds the package capacity.
    async fn create(&self, event: CreateBooking) -> AppResult<CreatedBooking>;

    /// Tourist-initiated cancellation, only ever from `pending`.
    async fn cancel(&self, event: CancelBooking) -> AppResult<()>;

    /// Provider/admin status transition, checked against the lifecycle
    /// transition table.
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()>;

    /// Provider recovery path: bring a cancelled booking back and clear its
    /// cancellation fields.
    async fn reactivate(&self, event: ReactivateBooking) -> AppResult<()>;

    /// Record that the refund for a cancelled booking was paid out.
    /// Idempotent: re-marking keeps the original timestamp.
    async fn mark_refund_processed(&self, event: MarkRefundProcessed) -> AppResult<()>;

    /// A single booking, visible only to its owner.
    async fn find_by_id(&self, booking_id: BookingId, user_id: UserId) -> AppResult<Booking>;

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>>;

    /// Booking history joined with the caller's own review and the package
    /// rating aggregate.
    async fn find_by_user_with_reviews(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<BookingWithReview>>;

    /// Completed bookings eligible for (or already carrying) a review.
    async fn find_completed_for_review(&self, user_id: UserId) -> AppResult<Vec<Booking>>;

    /// Admin-only listing; role enforcement happens at the call site.
    async fn find_by_status(&self, status: BookingStatus) -> AppResult<Vec<Booking>>;

    /// All bookings against packages owned by the given provider.
    async fn find_by_package_owner(&self, owner_id: UserId) -> AppResult<Vec<Booking>>;
}
