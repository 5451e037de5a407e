use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use kernel::model::{id::UserId, role::Role, user::User};
use registry::AppRegistry;
use shared::error::AppError;

/// The session layer in front of this service resolves the cookie and
/// forwards the caller's id in the `x-user-id` header. This extractor turns
/// that header into a loaded, non-suspended user or rejects the request.
pub struct AuthorizedUser {
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }

    pub fn is_activity_provider(&self) -> bool {
        matches!(self.user.role, Role::ActivityProvider)
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<UserId>().ok())
            .ok_or(AppError::UnauthenticatedError)?;

        let user = registry
            .user_repository()
            .find_current_user(user_id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        if user.is_suspended {
            return Err(AppError::UnauthorizedError(
                "This account is suspended.".into(),
            ));
        }

        Ok(Self { user })
    }
}
