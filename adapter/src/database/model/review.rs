use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use kernel::model::{
    id::{BookingId, PackageId, ReviewId, UserId},
    package::ActivityType,
    review::{RatingSummary, Review, UserReview},
    user::Reviewer,
};

#[derive(FromRow)]
pub struct ReviewRow {
    pub review_id: ReviewId,
    pub booking_id: BookingId,
    pub package_id: PackageId,
    pub rating: i32,
    pub comment: Option<String>,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            review_id,
            booking_id,
            package_id,
            rating,
            comment,
            user_id,
            first_name,
            last_name,
            created_at,
            updated_at,
        } = value;
        Review {
            review_id,
            booking_id,
            package_id,
            rating,
            comment,
            reviewer: Reviewer {
                user_id,
                first_name,
                last_name,
            },
            created_at,
            updated_at,
        }
    }
}

#[derive(FromRow)]
pub struct UserReviewRow {
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

impl From<UserReviewRow> for UserReview {
    fn from(value: UserReviewRow) -> Self {
        let UserReviewRow {
            review_id,
            booking_id,
            package_id,
            package_name,
            activity_type,
            rating,
            comment,
            created_at,
            updated_at,
        } = value;
        UserReview {
            review_id,
            booking_id,
            package_id,
            package_name,
            activity_type,
            rating,
            comment,
            created_at,
            updated_at,
        }
    }
}

/// COUNT/AVG/histogram row. COALESCE in the query guarantees zero-filled
/// values on an empty table.
#[derive(FromRow)]
pub struct RatingSummaryRow {
    pub review_count: i64,
    pub average_rating: Decimal,
    pub five_star: i64,
    pub four_star: i64,
    pub three_star: i64,
    pub two_star: i64,
    pub one_star: i64,
}

impl From<RatingSummaryRow> for RatingSummary {
    fn from(value: RatingSummaryRow) -> Self {
        let RatingSummaryRow {
            review_count,
            average_rating,
            five_star,
            four_star,
            three_star,
            two_star,
            one_star,
        } = value;
        RatingSummary {
            review_count,
            average_rating,
            five_star,
            four_star,
            three_star,
            two_star,
            one_star,
        }
    }
}
