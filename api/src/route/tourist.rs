use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::tourist::{register_tourist, show_my_tourist_profile};

pub fn build_tourist_routers() -> Router<AppRegistry> {
    let tourists_routers = Router::new()
        .route("/", post(register_tourist))
        .route("/me", get(show_my_tourist_profile));

    Router::new().nest("/tourists", tourists_routers)
}
