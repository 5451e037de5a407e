use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;

use kernel::model::{
    booking::event::{
        BookingOperator, CancelBooking, MarkRefundProcessed, ReactivateBooking,
        UpdateBookingStatus,
    },
    id::BookingId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingListQuery, BookingResponse, BookingsResponse, BookingsWithReviewsResponse,
        CancelBookingRequest, CreateBookingRequest, CreatedBookingResponse,
        ReactivateBookingRequest, UpdateBookingStatusRequest,
    },
};

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let created = registry
        .booking_repository()
        .create(req.into_create_booking(user.id()))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedBookingResponse::from(created)),
    ))
}

pub async fn show_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id, user.id())
        .await?;

    Ok(Json(BookingResponse::from(booking)))
}

pub async fn show_my_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let bookings = registry
        .booking_repository()
        .find_by_user(user.id())
        .await?;

    Ok(Json(BookingsResponse::from(bookings)))
}

/// Booking history joined with the caller's own reviews, for the
/// "my trips" view.
pub async fn show_my_bookings_with_reviews(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsWithReviewsResponse>> {
    let bookings = registry
        .booking_repository()
        .find_by_user_with_reviews(user.id())
        .await?;

    Ok(Json(BookingsWithReviewsResponse::from(bookings)))
}

pub async fn show_completed_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let bookings = registry
        .booking_repository()
        .find_completed_for_review(user.id())
        .await?;

    Ok(Json(BookingsResponse::from(bookings)))
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CancelBookingRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .booking_repository()
        .cancel(CancelBooking::new(
            booking_id,
            user.id(),
            req.cancellation_reason,
        ))
        .await?;

    Ok(StatusCode::OK)
}

pub async fn update_booking_status(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let operator = BookingOperator::new(user.id(), user.user.role);
    registry
        .booking_repository()
        .update_status(UpdateBookingStatus::new(
            booking_id,
            operator,
            req.status.into(),
            req.notes,
            req.cancellation_reason,
        ))
        .await?;

    Ok(StatusCode::OK)
}

pub async fn reactivate_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ReactivateBookingRequest>,
) -> AppResult<StatusCode> {
    let operator = BookingOperator::new(user.id(), user.user.role);
    registry
        .booking_repository()
        .reactivate(ReactivateBooking::new(
            booking_id,
            operator,
            req.status.into(),
        ))
        .await?;

    Ok(StatusCode::OK)
}

pub async fn mark_refund_processed(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let operator = BookingOperator::new(user.id(), user.user.role);
    registry
        .booking_repository()
        .mark_refund_processed(MarkRefundProcessed::new(booking_id, operator))
        .await?;

    Ok(StatusCode::OK)
}

/// Admin-only listing across all tourists, filtered by status.
pub async fn show_bookings_by_status(
    user: AuthorizedUser,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let bookings = registry
        .booking_repository()
        .find_by_status(query.status.into())
        .await?;

    Ok(Json(BookingsResponse::from(bookings)))
}

/// Every booking against the calling provider's packages.
pub async fn show_provider_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    if !user.is_activity_provider() && !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let bookings = registry
        .booking_repository()
        .find_by_package_owner(user.id())
        .await?;

    Ok(Json(BookingsResponse::from(bookings)))
}
