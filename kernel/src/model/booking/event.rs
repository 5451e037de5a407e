use chrono::NaiveDate;
use derive_new::new;

use crate::model::{
    booking::{BookingStatus, PaymentMethod},
    id::{BookingId, PackageId, UserId},
    role::Role,
};

#[derive(new)]
pub struct CreateBooking {
    pub requested_user: UserId,
    pub package_id: PackageId,
    pub booking_date: NaiveDate,
    pub number_of_participants: i32,
    pub contact_number: String,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub special_requests: Option<String>,
    pub payment_method: PaymentMethod,
}

#[derive(new)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub requested_user: UserId,
    pub cancellation_reason: String,
}

/// Who is acting on a booking lifecycle operation. Providers may only
/// touch bookings of packages they own; admins may touch any.
#[derive(Debug, Clone, Copy, new)]
pub struct BookingOperator {
    pub user_id: UserId,
    pub role: Role,
}

#[derive(new)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    pub operator: BookingOperator,
    pub new_status: BookingStatus,
    pub notes: Option<String>,
    pub cancellation_reason: Option<String>,
}

#[derive(new)]
pub struct ReactivateBooking {
    pub booking_id: BookingId,
    pub operator: BookingOperator,
    pub new_status: BookingStatus,
}

#[derive(new)]
pub struct MarkRefundProcessed {
    pub booking_id: BookingId,
    pub operator: BookingOperator,
}
