use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    cancel_booking, mark_refund_processed, reactivate_booking, register_booking, show_booking,
    show_bookings_by_status, show_completed_bookings, show_my_bookings,
    show_my_bookings_with_reviews, show_provider_bookings, update_booking_status,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", post(register_booking))
        .route("/", get(show_bookings_by_status))
        .route("/mine", get(show_my_bookings))
        .route("/mine/reviews", get(show_my_bookings_with_reviews))
        .route("/mine/completed", get(show_completed_bookings))
        .route("/provider", get(show_provider_bookings))
        .route("/:booking_id", get(show_booking))
        .route("/:booking_id/cancel", put(cancel_booking))
        .route("/:booking_id/status", put(update_booking_status))
        .route("/:booking_id/reactivate", put(reactivate_booking))
        .route("/:booking_id/refund", put(mark_refund_processed));

    Router::new().nest("/bookings", bookings_routers)
}
