use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use strum::{AsRefStr, EnumString};

use crate::model::{
    id::{BookingId, PackageId, TouristId, UserId},
    package::ActivityType,
    user::PackageOwner,
};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, sqlx::Type, serde::Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// The transition table for the whole lifecycle. Every status change in
    /// the system goes through this single check.
    pub fn allowed_transitions(self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Pending => &[BookingStatus::Confirmed, BookingStatus::Cancelled],
            BookingStatus::Confirmed => &[BookingStatus::Completed, BookingStatus::Cancelled],
            // Terminal states.
            BookingStatus::Completed | BookingStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Bookings in these states block package deletion.
    pub fn is_active(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Tourists may only walk away from a booking the provider has not
    /// acted on yet. Later cancellations are provider-initiated.
    pub fn tourist_can_cancel(self) -> bool {
        matches!(self, BookingStatus::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, sqlx::Type, serde::Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "payment_method", rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Gcash,
}

impl PaymentMethod {
    /// Online payments get their own reference so the provider can match
    /// the GCash transfer against the booking.
    pub fn needs_payment_reference(self) -> bool {
        matches!(self, PaymentMethod::Gcash)
    }
}

const BOOKING_REFERENCE_PREFIX: &str = "GG";
const PAYMENT_REFERENCE_PREFIX: &str = "PAY";
const RANDOM_SUFFIX_LEN: usize = 4;
const RANDOM_SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn generate_reference(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let timestamp_suffix = &millis[millis.len().saturating_sub(6)..];
    let mut rng = rand::thread_rng();
    let random_suffix: String = (0..RANDOM_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..RANDOM_SUFFIX_CHARSET.len());
            RANDOM_SUFFIX_CHARSET[idx] as char
        })
        .collect();
    format!("{prefix}{timestamp_suffix}{random_suffix}")
}

/// Human-shareable booking code: `GG` + last 6 digits of the unix-ms
/// timestamp + 4 random characters.
pub fn generate_booking_reference() -> String {
    generate_reference(BOOKING_REFERENCE_PREFIX)
}

pub fn generate_payment_reference() -> String {
    generate_reference(PAYMENT_REFERENCE_PREFIX)
}

#[derive(Debug)]
pub struct Booking {
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
    pub package: BookingPackage,
}

/// Package columns joined into every booking listing.
#[derive(Debug)]
pub struct BookingPackage {
    pub package_id: PackageId,
    pub name: String,
    pub activity_type: ActivityType,
    pub price: Decimal,
    pub duration_hours: i32,
    pub max_participants: i32,
}

/// A booking row for the tourist's history view, carrying the caller's own
/// review (if any) and the package's rating aggregate alongside.
#[derive(Debug)]
pub struct BookingWithReview {
    pub booking: Booking,
    pub provider: Option<PackageOwner>,
    pub has_user_reviewed: bool,
    pub user_rating: Option<i32>,
    pub user_comment: Option<String>,
    pub package_review_count: i64,
    pub package_average_rating: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pending_can_be_confirmed_or_cancelled() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn confirmed_can_be_completed_or_cancelled() {
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn completed_and_cancelled_are_terminal() {
        for status in [BookingStatus::Completed, BookingStatus::Cancelled] {
            assert!(status.is_terminal());
            for next in [
                BookingStatus::Pending,
                BookingStatus::Confirmed,
                BookingStatus::Completed,
                BookingStatus::Cancelled,
            ] {
                assert!(!status.can_transition_to(next));
            }
        }
    }

    #[test]
    fn only_pending_is_tourist_cancellable() {
        assert!(BookingStatus::Pending.tourist_can_cancel());
        assert!(!BookingStatus::Confirmed.tourist_can_cancel());
        assert!(!BookingStatus::Completed.tourist_can_cancel());
        assert!(!BookingStatus::Cancelled.tourist_can_cancel());
    }

    #[test]
    fn booking_reference_has_the_documented_shape() {
        let reference = generate_booking_reference();
        assert_eq!(reference.len(), 12);
        assert!(reference.starts_with("GG"));
        assert!(reference[2..8].chars().all(|c| c.is_ascii_digit()));
        assert!(reference[8..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn payment_reference_uses_the_pay_prefix() {
        let reference = generate_payment_reference();
        assert_eq!(reference.len(), 13);
        assert!(reference.starts_with("PAY"));
    }

    #[test]
    fn references_in_the_same_millisecond_are_distinct() {
        // The random suffix differentiates references even when the
        // timestamp suffix collides. 32 draws in a tight loop make at
        // least one same-millisecond pair overwhelmingly likely.
        let refs: HashSet<String> = (0..32).map(|_| generate_booking_reference()).collect();
        assert_eq!(refs.len(), 32);
    }

    #[test]
    fn only_gcash_needs_a_payment_reference() {
        assert!(PaymentMethod::Gcash.needs_payment_reference());
        assert!(!PaymentMethod::Cash.needs_payment_reference());
    }
}
