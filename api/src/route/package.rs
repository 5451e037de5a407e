use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::package::{
    delete_package, register_package, show_owned_packages, show_package, show_package_list,
    show_package_reviews, update_package,
};

pub fn build_package_routers() -> Router<AppRegistry> {
    let packages_routers = Router::new()
        .route("/", post(register_package))
        .route("/", get(show_package_list))
        .route("/mine", get(show_owned_packages))
        .route("/:package_id", get(show_package))
        .route("/:package_id", put(update_package))
        .route("/:package_id", delete(delete_package))
        .route("/:package_id/reviews", get(show_package_reviews));

    Router::new().nest("/packages", packages_routers)
}
