use async_trait::async_trait;
use derive_new::new;

use kernel::model::{
    booking::BookingStatus,
    id::{PackageId, ReviewId, UserId},
    review::{
        event::{CreateReview, DeleteReview, ReviewListFilter, UpdateReview},
        rating_is_valid, PackageReviews, Review, UserReview, MAX_RATING, MIN_RATING,
    },
};
use kernel::repository::review::ReviewRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::review::{RatingSummaryRow, ReviewRow, UserReviewRow},
    ConnectionPool,
};

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId> {
        if !rating_is_valid(event.rating) {
            return Err(AppError::UnprocessableEntity(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}."
            )));
        }

        let mut tx = self.db.begin().await?;

        // The booking must exist, belong to the reviewer, be completed and
        // not be reviewed already.
        let booking = sqlx::query_as::<_, (UserId, BookingStatus, PackageId, bool)>(
            r#"
                SELECT
                    b.user_id,
                    b.status,
                    b.package_id,
                    EXISTS (
                        SELECT 1 FROM reviews r WHERE r.booking_id = b.booking_id
                    ) AS already_reviewed
                FROM bookings AS b
                WHERE b.booking_id = $1
                ;
            "#,
        )
        .bind(event.booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        let Some((owner, status, package_id, already_reviewed)) = booking else {
            return Err(AppError::EntityNotFound(format!(
                "Booking ({}) not found.",
                event.booking_id
            )));
        };

        if owner != event.requested_user {
            return Err(AppError::ForbiddenOperation);
        }
        // Reviewing is a privilege of the owner of a completed booking.
        if status != BookingStatus::Completed {
            return Err(AppError::ForbiddenOperation);
        }
        if already_reviewed {
            return Err(AppError::ConflictError(format!(
                "Booking ({}) has already been reviewed.",
                event.booking_id
            )));
        }

        let review_id = ReviewId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reviews
                (review_id, booking_id, package_id, user_id, rating, comment)
                VALUES ($1, $2, $3, $4, $5, $6)
                ;
            "#,
        )
        .bind(review_id)
        .bind(event.booking_id)
        .bind(package_id)
        .bind(event.requested_user)
        .bind(event.rating)
        .bind(&event.comment)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e {
            // The UNIQUE constraint on booking_id catches a concurrent
            // double-submit the EXISTS pre-check missed.
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::ConflictError(format!(
                    "Booking ({}) has already been reviewed.",
                    event.booking_id
                ))
            }
            e => AppError::DbQueryError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No review record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(review_id)
    }

    async fn update(&self, event: UpdateReview) -> AppResult<()> {
        if event.patch.is_empty() {
            return Err(AppError::UnprocessableEntity(
                "No review fields to update.".into(),
            ));
        }
        if let Some(rating) = event.patch.rating {
            if !rating_is_valid(rating) {
                return Err(AppError::UnprocessableEntity(format!(
                    "Rating must be between {MIN_RATING} and {MAX_RATING}."
                )));
            }
        }

        let mut tx = self.db.begin().await?;

        self.check_ownership(&mut tx, event.review_id, event.requested_user)
            .await?;

        let res = sqlx::query(
            r#"
                UPDATE reviews
                SET
                    rating = COALESCE($1, rating),
                    comment = COALESCE($2, comment),
                    updated_at = NOW()
                WHERE review_id = $3 AND user_id = $4
                ;
            "#,
        )
        .bind(event.patch.rating)
        .bind(event.patch.comment)
        .bind(event.review_id)
        .bind(event.requested_user)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No review record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn delete(&self, event: DeleteReview) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.check_ownership(&mut tx, event.review_id, event.requested_user)
            .await?;

        let res = sqlx::query(
            r#"
                DELETE FROM reviews
                WHERE review_id = $1 AND user_id = $2
                ;
            "#,
        )
        .bind(event.review_id)
        .bind(event.requested_user)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No review record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_for_package(
        &self,
        package_id: PackageId,
        filter: ReviewListFilter,
    ) -> AppResult<PackageReviews> {
        let reviews = sqlx::query_as::<_, ReviewRow>(
            r#"
                SELECT
                    r.review_id,
                    r.booking_id,
                    r.package_id,
                    r.rating,
                    r.comment,
                    u.user_id,
                    u.first_name,
                    u.last_name,
                    r.created_at,
                    r.updated_at
                FROM reviews AS r
                INNER JOIN users AS u ON r.user_id = u.user_id
                WHERE r.package_id = $1
                  AND ($2::INT IS NULL OR r.rating = $2)
                ORDER BY r.created_at DESC
                ;
            "#,
        )
        .bind(package_id)
        .bind(filter.rating)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?
        .into_iter()
        .map(Review::from)
        .collect();

        // The summary always covers the whole package, not the filtered
        // slice.
        let summary = sqlx::query_as::<_, RatingSummaryRow>(
            r#"
                SELECT
                    COUNT(*) AS review_count,
                    COALESCE(ROUND(AVG(rating), 1), 0) AS average_rating,
                    COUNT(*) FILTER (WHERE rating = 5) AS five_star,
                    COUNT(*) FILTER (WHERE rating = 4) AS four_star,
                    COUNT(*) FILTER (WHERE rating = 3) AS three_star,
                    COUNT(*) FILTER (WHERE rating = 2) AS two_star,
                    COUNT(*) FILTER (WHERE rating = 1) AS one_star
                FROM reviews
                WHERE package_id = $1
                ;
            "#,
        )
        .bind(package_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(PackageReviews {
            reviews,
            summary: summary.into(),
        })
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<UserReview>> {
        sqlx::query_as::<_, UserReviewRow>(
            r#"
                SELECT
                    r.review_id,
                    r.booking_id,
                    r.package_id,
                    p.name AS package_name,
                    p.activity_type,
                    r.rating,
                    r.comment,
                    r.created_at,
                    r.updated_at
                FROM reviews AS r
                INNER JOIN packages AS p ON r.package_id = p.package_id
                WHERE r.user_id = $1
                ORDER BY r.created_at DESC
                ;
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(UserReview::from).collect())
        .map_err(AppError::DbQueryError)
    }
}

impl ReviewRepositoryImpl {
    /// The review must exist and belong to the caller before any mutation
    /// proceeds.
    async fn check_ownership(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        review_id: ReviewId,
        requested_user: UserId,
    ) -> AppResult<()> {
        let row = sqlx::query_as::<_, (UserId,)>(
            r#"
                SELECT user_id
                FROM reviews
                WHERE review_id = $1
                ;
            "#,
        )
        .bind(review_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::DbQueryError)?;

        let Some((owner,)) = row else {
            return Err(AppError::EntityNotFound(format!(
                "Review ({review_id}) not found."
            )));
        };

        if owner != requested_user {
            return Err(AppError::ForbiddenOperation);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::{
        booking::event::{BookingOperator, UpdateBookingStatus},
        id::BookingId,
        role::Role,
    };
    use kernel::repository::booking::BookingRepository;

    use super::*;
    use crate::repository::{
        booking::BookingRepositoryImpl,
        test_support::{booking_event, seed_package, seed_tourist, seed_user},
    };

    async fn seed_booking(
        db: &ConnectionPool,
    ) -> anyhow::Result<(UserId, UserId, PackageId, BookingId)> {
        let tourist_user = seed_user(db, "maria", Role::Tourist).await?;
        seed_tourist(db, tourist_user).await?;
        let provider = seed_user(db, "pedro", Role::ActivityProvider).await?;
        let package_id = seed_package(db, provider, 4).await?;
        let created = BookingRepositoryImpl::new(db.clone())
            .create(booking_event(tourist_user, package_id, 2))
            .await?;
        Ok((tourist_user, provider, package_id, created.booking_id))
    }

    async fn complete_booking(
        db: &ConnectionPool,
        booking_id: BookingId,
        provider: UserId,
    ) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(db.clone());
        let operator = BookingOperator::new(provider, Role::ActivityProvider);
        repo.update_status(UpdateBookingStatus::new(
            booking_id,
            operator,
            BookingStatus::Confirmed,
            None,
            None,
        ))
        .await?;
        repo.update_status(UpdateBookingStatus::new(
            booking_id,
            operator,
            BookingStatus::Completed,
            None,
            None,
        ))
        .await?;
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn only_completed_bookings_can_be_reviewed(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let (tourist_user, _, _, booking_id) = seed_booking(&db).await?;

        let repo = ReviewRepositoryImpl::new(db);
        let res = repo
            .create(CreateReview::new(booking_id, tourist_user, 5, None))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn strangers_cannot_review_someone_elses_booking(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let (_, provider, _, booking_id) = seed_booking(&db).await?;
        complete_booking(&db, booking_id, provider).await?;
        let other = seed_user(&db, "juan", Role::Tourist).await?;

        let repo = ReviewRepositoryImpl::new(db);
        let res = repo
            .create(CreateReview::new(booking_id, other, 5, None))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn a_booking_carries_at_most_one_review(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let (tourist_user, provider, package_id, booking_id) = seed_booking(&db).await?;
        complete_booking(&db, booking_id, provider).await?;

        let repo = ReviewRepositoryImpl::new(db);
        repo.create(CreateReview::new(
            booking_id,
            tourist_user,
            5,
            Some("Great trip".into()),
        ))
        .await?;
        let res = repo
            .create(CreateReview::new(booking_id, tourist_user, 4, None))
            .await;
        assert!(matches!(res, Err(AppError::ConflictError(_))));

        let listing = repo
            .find_for_package(package_id, ReviewListFilter::default())
            .await?;
        assert_eq!(listing.reviews.len(), 1);
        assert_eq!(listing.summary.review_count, 1);
        assert_eq!(listing.summary.five_star, 1);
        Ok(())
    }
}
