use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use kernel::model::{
    booking::{Booking, BookingPackage, BookingStatus, BookingWithReview, PaymentMethod},
    id::{BookingId, PackageId, TouristId, UserId},
    package::ActivityType,
    user::PackageOwner,
};

/// A booking joined with its package columns, the shape every booking
/// listing query selects.
#[derive(FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub tourist_id: TouristId,
    pub booking_reference: String,
    pub booking_date: NaiveDate,
    pub number_of_participants: i32,
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub payment_method: PaymentMethod,
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
    pub package_id: PackageId,
    pub package_name: String,
    pub activity_type: ActivityType,
    pub package_price: Decimal,
    pub duration_hours: i32,
    pub max_participants: i32,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
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
            package_id,
            package_name,
            activity_type,
            package_price,
            duration_hours,
            max_participants,
        } = value;
        Booking {
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
            package: BookingPackage {
                package_id,
                name: package_name,
                activity_type,
                price: package_price,
                duration_hours,
                max_participants,
            },
        }
    }
}

/// The tourist history view: the booking row plus provider contact details,
/// the caller's own review and the package rating aggregate.
#[derive(FromRow)]
pub struct BookingWithReviewRow {
    #[sqlx(flatten)]
    pub booking: BookingRow,
    pub provider_id: Option<UserId>,
    pub provider_name: Option<String>,
    pub provider_contact: Option<String>,
    pub provider_email: Option<String>,
    pub provider_gcash_number: Option<String>,
    pub provider_gcash_name: Option<String>,
    pub has_user_reviewed: bool,
    pub user_rating: Option<i32>,
    pub user_comment: Option<String>,
    pub package_review_count: i64,
    pub package_average_rating: Decimal,
}

impl From<BookingWithReviewRow> for BookingWithReview {
    fn from(value: BookingWithReviewRow) -> Self {
        let provider = match (value.provider_id, value.provider_name) {
            (Some(owner_id), Some(owner_name)) => Some(PackageOwner {
                owner_id,
                owner_name,
                contact_number: value.provider_contact.unwrap_or_default(),
                email: value.provider_email.unwrap_or_default(),
                gcash_number: value.provider_gcash_number,
                gcash_name: value.provider_gcash_name,
            }),
            _ => None,
        };
        BookingWithReview {
            booking: value.booking.into(),
            provider,
            has_user_reviewed: value.has_user_reviewed,
            user_rating: value.user_rating,
            user_comment: value.user_comment,
            package_review_count: value.package_review_count,
            package_average_rating: value.package_average_rating,
        }
    }
}

/// Minimal projection used by the lifecycle operations to decide whether a
/// transition is legal before attempting the conditional update.
#[derive(FromRow)]
pub struct BookingStateRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub package_owner: UserId,
    pub status: BookingStatus,
    pub refund_processed: bool,
}
