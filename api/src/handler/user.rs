use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;

use kernel::model::{
    id::UserId,
    user::event::{SuspendUser, UnsuspendUser},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::user::{CreateUserRequest, SuspendUserRequest, UserResponse, UsersResponse},
};

/// Registration is the one write that happens before a session exists.
pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let user = registry.user_repository().create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn show_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(UserResponse::from(user.user))
}

pub async fn show_user_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let users = registry.user_repository().find_all().await?;

    Ok(Json(UsersResponse::from(users)))
}

pub async fn suspend_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<SuspendUserRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .user_repository()
        .suspend(SuspendUser::new(user_id, user.id(), req.reason))
        .await?;

    Ok(StatusCode::OK)
}

pub async fn unsuspend_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .user_repository()
        .unsuspend(UnsuspendUser::new(user_id))
        .await?;

    Ok(StatusCode::OK)
}
