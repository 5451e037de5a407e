use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;

use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::tourist::{RegisterTouristRequest, TouristResponse},
};

pub async fn register_tourist(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterTouristRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let tourist_id = registry
        .tourist_repository()
        .create(req.into_register_tourist(user.id()))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "touristId": tourist_id })),
    ))
}

pub async fn show_my_tourist_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TouristResponse>> {
    let tourist = registry
        .tourist_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound("No tourist registration found for this account.".into())
        })?;

    Ok(Json(TouristResponse::from(tourist)))
}
