use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;

use kernel::model::{
    id::ReviewId,
    review::event::{DeleteReview, UpdateReview},
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::review::{CreateReviewRequest, UpdateReviewRequest, UserReviewsResponse},
};

pub async fn register_review(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let review_id = registry
        .review_repository()
        .create(req.into_create_review(user.id()))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "reviewId": review_id })),
    ))
}

pub async fn update_review(
    user: AuthorizedUser,
    Path(review_id): Path<ReviewId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReviewRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .review_repository()
        .update(UpdateReview::new(review_id, user.id(), req.into()))
        .await?;

    Ok(StatusCode::OK)
}

pub async fn delete_review(
    user: AuthorizedUser,
    Path(review_id): Path<ReviewId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .review_repository()
        .delete(DeleteReview::new(review_id, user.id()))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn show_my_reviews(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserReviewsResponse>> {
    let reviews = registry.review_repository().find_by_user(user.id()).await?;

    Ok(Json(UserReviewsResponse::from(reviews)))
}
