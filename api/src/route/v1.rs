use axum::Router;
use registry::AppRegistry;

use super::{
    booking::build_booking_routers, health::build_health_check_routers,
    package::build_package_routers, review::build_review_routers, stats::build_stats_routers,
    tourist::build_tourist_routers, user::build_user_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_user_routers())
        .merge(build_tourist_routers())
        .merge(build_package_routers())
        .merge(build_booking_routers())
        .merge(build_review_routers())
        .merge(build_stats_routers());

    Router::new().nest("/api/v1", router)
}
