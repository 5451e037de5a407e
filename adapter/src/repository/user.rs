use async_trait::async_trait;
use derive_new::new;

use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, SuspendUser, UnsuspendUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users
                (user_id, username, first_name, last_name, email,
                 password_hash, contact_number, role)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING
                    user_id, username, first_name, last_name, email,
                    contact_number, role, is_suspended, suspension_reason,
                    suspended_at
                ;
            "#,
        )
        .bind(user_id)
        .bind(&event.username)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(&event.contact_number)
        .bind(event.role)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::ConflictError(format!(
                    "An account with the email {} already exists.",
                    event.email
                ))
            }
            e => AppError::DbQueryError(e),
        })?;

        Ok(User::from(row))
    }

    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT
                    user_id, username, first_name, last_name, email,
                    contact_number, role, is_suspended, suspension_reason,
                    suspended_at
                FROM users
                WHERE user_id = $1
                ;
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, UserRow>(
            r#"
                SELECT
                    user_id, username, first_name, last_name, email,
                    contact_number, role, is_suspended, suspension_reason,
                    suspended_at
                FROM users
                ORDER BY created_at DESC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(User::from).collect())
        .map_err(AppError::DbQueryError)
    }

    async fn suspend(&self, event: SuspendUser) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET
                    is_suspended = TRUE,
                    suspension_reason = $1,
                    suspended_at = NOW(),
                    suspended_by = $2
                WHERE user_id = $3
                ;
            "#,
        )
        .bind(&event.reason)
        .bind(event.suspended_by)
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "User ({}) not found.",
                event.user_id
            )));
        }

        Ok(())
    }

    async fn unsuspend(&self, event: UnsuspendUser) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET
                    is_suspended = FALSE,
                    suspension_reason = NULL,
                    suspended_at = NULL,
                    suspended_by = NULL
                WHERE user_id = $1
                ;
            "#,
        )
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "User ({}) not found.",
                event.user_id
            )));
        }

        Ok(())
    }
}
