use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::model::{
    id::{BookingId, PackageId, ReviewId, UserId},
    package::ActivityType,
    user::Reviewer,
};

pub mod event;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub fn rating_is_valid(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

#[derive(Debug)]
pub struct Review {
    pub review_id: ReviewId,
    pub booking_id: BookingId,
    pub package_id: PackageId,
    pub rating: i32,
    pub comment: Option<String>,
    pub reviewer: Reviewer,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A review in the author's own listing, joined with package identity.
#[derive(Debug)]
pub struct UserReview {
    pub review_id: ReviewId,
    pub booking_id: BookingId,
    pub package_id: PackageId,
    pub package_name: String,
    pub activity_type: ActivityType,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Count, average and per-star breakdown for one package. Zero reviews
/// yields the all-zero summary, never an error.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RatingSummary {
    pub review_count: i64,
    pub average_rating: Decimal,
    pub five_star: i64,
    pub four_star: i64,
    pub three_star: i64,
    pub two_star: i64,
    pub one_star: i64,
}

#[derive(Debug)]
pub struct PackageReviews {
    pub reviews: Vec<Review>,
    pub summary: RatingSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(!rating_is_valid(0));
        assert!(rating_is_valid(1));
        assert!(rating_is_valid(3));
        assert!(rating_is_valid(5));
        assert!(!rating_is_valid(6));
    }

    #[test]
    fn default_summary_is_all_zero() {
        let summary = RatingSummary::default();
        assert_eq!(summary.review_count, 0);
        assert_eq!(summary.average_rating, Decimal::ZERO);
        assert_eq!(summary.five_star + summary.one_star, 0);
    }
}
