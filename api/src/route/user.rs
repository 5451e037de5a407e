use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    register_user, show_current_user, show_user_list, suspend_user, unsuspend_user,
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", post(register_user))
        .route("/", get(show_user_list))
        .route("/me", get(show_current_user))
        .route("/:user_id/suspend", put(suspend_user))
        .route("/:user_id/unsuspend", put(unsuspend_user));

    Router::new().nest("/users", users_routers)
}
