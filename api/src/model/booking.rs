use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kernel::model::{
    booking::{
        event::CreateBooking, Booking, BookingPackage, BookingStatus, BookingWithReview,
        PaymentMethod,
    },
    id::{BookingId, PackageId, TouristId, UserId},
};
use kernel::repository::booking::CreatedBooking;

use crate::model::{package::ActivityTypeName, user::PackageOwnerResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodName {
    Cash,
    Gcash,
}

impl From<PaymentMethod> for PaymentMethodName {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Cash => PaymentMethodName::Cash,
            PaymentMethod::Gcash => PaymentMethodName::Gcash,
        }
    }
}

impl From<PaymentMethodName> for PaymentMethod {
    fn from(value: PaymentMethodName) -> Self {
        match value {
            PaymentMethodName::Cash => PaymentMethod::Cash,
            PaymentMethodName::Gcash => PaymentMethod::Gcash,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatusName {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl From<BookingStatus> for BookingStatusName {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Pending => BookingStatusName::Pending,
            BookingStatus::Confirmed => BookingStatusName::Confirmed,
            BookingStatus::Completed => BookingStatusName::Completed,
            BookingStatus::Cancelled => BookingStatusName::Cancelled,
        }
    }
}

impl From<BookingStatusName> for BookingStatus {
    fn from(value: BookingStatusName) -> Self {
        match value {
            BookingStatusName::Pending => BookingStatus::Pending,
            BookingStatusName::Confirmed => BookingStatus::Confirmed,
            BookingStatusName::Completed => BookingStatus::Completed,
            BookingStatusName::Cancelled => BookingStatus::Cancelled,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub package_id: PackageId,
    #[garde(skip)]
    pub booking_date: NaiveDate,
    #[garde(range(min = 1))]
    pub number_of_participants: i32,
    #[garde(length(min = 1))]
    pub contact_number: String,
    #[garde(skip)]
    pub emergency_contact: Option<String>,
    #[garde(skip)]
    pub emergency_phone: Option<String>,
    #[garde(skip)]
    pub special_requests: Option<String>,
    #[garde(skip)]
    pub payment_method: PaymentMethodName,
}

impl CreateBookingRequest {
    pub fn into_create_booking(self, requested_user: UserId) -> CreateBooking {
        let CreateBookingRequest {
            package_id,
            booking_date,
            number_of_participants,
            contact_number,
            emergency_contact,
            emergency_phone,
            special_requests,
            payment_method,
        } = self;
        CreateBooking {
            requested_user,
            package_id,
            booking_date,
            number_of_participants,
            contact_number,
            emergency_contact,
            emergency_phone,
            special_requests,
            payment_method: payment_method.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    #[garde(length(min = 1))]
    pub cancellation_reason: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    #[garde(skip)]
    pub status: BookingStatusName,
    #[garde(skip)]
    pub notes: Option<String>,
    #[garde(skip)]
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReactivateBookingRequest {
    #[garde(skip)]
    pub status: BookingStatusName,
}

/// Admin listing filter, e.g. `GET /bookings?status=pending`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub status: BookingStatusName,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookingResponse {
    pub booking_id: BookingId,
    pub booking_reference: String,
    pub payment_reference: Option<String>,
}

impl From<CreatedBooking> for CreatedBookingResponse {
    fn from(value: CreatedBooking) -> Self {
        let CreatedBooking {
            booking_id,
            booking_reference,
            payment_reference,
        } = value;
        Self {
            booking_id,
            booking_reference,
            payment_reference,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPackageResponse {
    pub package_id: PackageId,
    pub name: String,
    pub activity_type: ActivityTypeName,
    pub price: Decimal,
    pub duration_hours: i32,
    pub max_participants: i32,
}

impl From<BookingPackage> for BookingPackageResponse {
    fn from(value: BookingPackage) -> Self {
        let BookingPackage {
            package_id,
            name,
            activity_type,
            price,
            duration_hours,
            max_participants,
        } = value;
        Self {
            package_id,
            name,
            activity_type: activity_type.into(),
            price,
            duration_hours,
            max_participants,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub tourist_id: TouristId,
    pub booking_reference: String,
    pub booking_date: NaiveDate,
    pub number_of_participants: i32,
    pub total_amount: Decimal,
    pub status: BookingStatusName,
    pub payment_method: PaymentMethodName,
    pub payment_reference: Option<String>,
    pub contact_number: String,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub special_requests: Option<String>,
    pub admin_notes: Option<String>,
    pub cancellation_reason: Option<String>,
    pub cancellation_notes: Option<String>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub provider_confirmed_at: Option<DateTime<Utc>>,
    pub provider_completed_at: Option<DateTime<Utc>>,
    pub activity_completed: bool,
    pub refund_processed: bool,
    pub refund_processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub package: BookingPackageResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            user_id,
            tourist_id,
            booking_reference,
            booking_date,
            number_of_participants,
            total_amount,
            status,
            payment_method,
            payment_reference,
            contact_number,
            emergency_contact,
            emergency_phone,
            special_requests,
            admin_notes,
            cancellation_reason,
            cancellation_notes,
            cancelled_at,
            provider_confirmed_at,
            provider_completed_at,
            activity_completed,
            refund_processed,
            refund_processed_at,
            created_at,
            package,
        } = value;
        Self {
            booking_id,
            user_id,
            tourist_id,
            booking_reference,
            booking_date,
            number_of_participants,
            total_amount,
            status: status.into(),
            payment_method: payment_method.into(),
            payment_reference,
            contact_number,
            emergency_contact,
            emergency_phone,
            special_requests,
            admin_notes,
            cancellation_reason,
            cancellation_notes,
            cancelled_at,
            provider_confirmed_at,
            provider_completed_at,
            activity_completed,
            refund_processed,
            refund_processed_at,
            created_at,
            package: package.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithReviewResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,
    pub provider: Option<PackageOwnerResponse>,
    pub has_user_reviewed: bool,
    pub user_rating: Option<i32>,
    pub user_comment: Option<String>,
    pub package_review_count: i64,
    pub package_average_rating: Decimal,
}

impl From<BookingWithReview> for BookingWithReviewResponse {
    fn from(value: BookingWithReview) -> Self {
        let BookingWithReview {
            booking,
            provider,
            has_user_reviewed,
            user_rating,
            user_comment,
            package_review_count,
            package_average_rating,
        } = value;
        Self {
            booking: booking.into(),
            provider: provider.map(PackageOwnerResponse::from),
            has_user_reviewed,
            user_rating,
            user_comment,
            package_review_count,
            package_average_rating,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsWithReviewsResponse {
    pub items: Vec<BookingWithReviewResponse>,
}

impl From<Vec<BookingWithReview>> for BookingsWithReviewsResponse {
    fn from(value: Vec<BookingWithReview>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(BookingWithReviewResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::from(BookingStatusName::from(status)), status);
        }
    }

    #[test]
    fn cancellation_requires_a_reason() {
        let req = CancelBookingRequest {
            cancellation_reason: "".into(),
        };
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn zero_participants_is_rejected() {
        let req = CreateBookingRequest {
            package_id: PackageId::new(),
            booking_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            number_of_participants: 0,
            contact_number: "09171234567".into(),
            emergency_contact: None,
            emergency_phone: None,
            special_requests: None,
            payment_method: PaymentMethodName::Cash,
        };
        assert!(req.validate(&()).is_err());
    }
}
