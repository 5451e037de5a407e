use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::stats::{
    show_booking_stats, show_provider_monthly_income, show_review_stats,
};

pub fn build_stats_routers() -> Router<AppRegistry> {
    let stats_routers = Router::new()
        .route("/bookings", get(show_booking_stats))
        .route("/reviews", get(show_review_stats))
        .route("/income", get(show_provider_monthly_income));

    Router::new().nest("/stats", stats_routers)
}
