use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    CapacityExceeded(String),
    #[error("{0}")]
    InvalidStateTransition(String),
    #[error("{0}")]
    ConflictError(String),
    #[error("transaction error")]
    TransactionError(#[source] sqlx::Error),
    #[error("database query error")]
    DbQueryError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    PasswordHashError(#[from] bcrypt::BcryptError),
    #[error("login is required")]
    UnauthenticatedError,
    #[error("{0}")]
    UnauthorizedError(String),
    #[error("the operation is not permitted")]
    ForbiddenOperation,
    #[error("{0}")]
    ConversionEntityError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::UnprocessableEntity(_)
            | AppError::CapacityExceeded(_)
            | AppError::InvalidStateTransition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::ConversionEntityError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedError(_) | AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            e @ (AppError::TransactionError(_)
            | AppError::DbQueryError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::PasswordHashError(_)) => {
                // Storage-level failures are logged with their cause but the
                // response body never carries the underlying detail.
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "unexpected error happened"
                );
                return (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
                    .into_response();
            }
        };

        (status_code, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_their_status_codes() {
        let cases = vec![
            (
                AppError::EntityNotFound("booking not found".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::ConflictError("review already exists".into()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::CapacityExceeded("too many participants".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::InvalidStateTransition("completed is terminal".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::UnauthenticatedError, StatusCode::UNAUTHORIZED),
            (AppError::ForbiddenOperation, StatusCode::FORBIDDEN),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn storage_errors_are_masked_as_internal() {
        let err = AppError::DbQueryError(sqlx::Error::RowNotFound);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
