use chrono::{DateTime, Utc};
use garde::Validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kernel::model::{
    id::{BookingId, PackageId, ReviewId, UserId},
    review::{
        event::{CreateReview, ReviewPatch},
        PackageReviews, RatingSummary, Review, UserReview,
    },
    user::Reviewer,
};

use crate::model::package::ActivityTypeName;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[garde(skip)]
    pub booking_id: BookingId,
    #[garde(range(min = 1, max = 5))]
    pub rating: i32,
    #[garde(skip)]
    pub comment: Option<String>,
}

impl CreateReviewRequest {
    pub fn into_create_review(self, requested_user: UserId) -> CreateReview {
        let CreateReviewRequest {
            booking_id,
            rating,
            comment,
        } = self;
        CreateReview {
            booking_id,
            requested_user,
            rating,
            comment,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    #[garde(inner(range(min = 1, max = 5)))]
    pub rating: Option<i32>,
    #[garde(skip)]
    pub comment: Option<String>,
}

impl From<UpdateReviewRequest> for ReviewPatch {
    fn from(value: UpdateReviewRequest) -> Self {
        let UpdateReviewRequest { rating, comment } = value;
        ReviewPatch { rating, comment }
    }
}

/// Optional star filter for the public listing,
/// e.g. `GET /packages/:id/reviews?rating=5`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListQuery {
    pub rating: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerResponse {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl From<Reviewer> for ReviewerResponse {
    fn from(value: Reviewer) -> Self {
        let Reviewer {
            user_id,
            first_name,
            last_name,
        } = value;
        Self {
            user_id,
            first_name,
            last_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: ReviewId,
    pub booking_id: BookingId,
    pub package_id: PackageId,
    pub rating: i32,
    pub comment: Option<String>,
    pub reviewer: ReviewerResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            review_id,
            booking_id,
            package_id,
            rating,
            comment,
            reviewer,
            created_at,
            updated_at,
        } = value;
        Self {
            review_id,
            booking_id,
            package_id,
            rating,
            comment,
            reviewer: reviewer.into(),
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummaryResponse {
    pub review_count: i64,
    pub average_rating: Decimal,
    pub five_star: i64,
    pub four_star: i64,
    pub three_star: i64,
    pub two_star: i64,
    pub one_star: i64,
}

impl From<RatingSummary> for RatingSummaryResponse {
    fn from(value: RatingSummary) -> Self {
        let RatingSummary {
            review_count,
            average_rating,
            five_star,
            four_star,
            three_star,
            two_star,
            one_star,
        } = value;
        Self {
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageReviewsResponse {
    pub reviews: Vec<ReviewResponse>,
    pub summary: RatingSummaryResponse,
}

impl From<PackageReviews> for PackageReviewsResponse {
    fn from(value: PackageReviews) -> Self {
        let PackageReviews { reviews, summary } = value;
        Self {
            reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
            summary: summary.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReviewResponse {
    pub review_id: ReviewId,
    pub booking_id: BookingId,
    pub package_id: PackageId,
    pub package_name: String,
    pub activity_type: ActivityTypeName,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<UserReview> for UserReviewResponse {
    fn from(value: UserReview) -> Self {
        let UserReview {
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
        Self {
            review_id,
            booking_id,
            package_id,
            package_name,
            activity_type: activity_type.into(),
            rating,
            comment,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReviewsResponse {
    pub items: Vec<UserReviewResponse>,
}

impl From<Vec<UserReview>> for UserReviewsResponse {
    fn from(value: Vec<UserReview>) -> Self {
        Self {
            items: value.into_iter().map(UserReviewResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_outside_bounds_is_rejected() {
        for rating in [0, 6] {
            let req = CreateReviewRequest {
                booking_id: BookingId::new(),
                rating,
                comment: None,
            };
            assert!(req.validate(&()).is_err());
        }
    }

    #[test]
    fn update_request_maps_to_patch() {
        let req = UpdateReviewRequest {
            rating: Some(4),
            comment: None,
        };
        let patch = ReviewPatch::from(req);
        assert_eq!(patch.rating, Some(4));
        assert!(patch.comment.is_none());
        assert!(!patch.is_empty());
    }
}
