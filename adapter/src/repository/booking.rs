use async_trait::async_trait;
use derive_new::new;
use rust_decimal::Decimal;

use kernel::model::{
    booking::{
        event::{
            BookingOperator, CancelBooking, CreateBooking, MarkRefundProcessed,
            ReactivateBooking, UpdateBookingStatus,
        },
        generate_booking_reference, generate_payment_reference, Booking, BookingStatus,
        BookingWithReview,
    },
    id::{BookingId, TouristId, UserId},
};
use kernel::repository::booking::{BookingRepository, CreatedBooking};
use shared::error::{AppError, AppResult};

use crate::database::{
    model::booking::{BookingRow, BookingStateRow, BookingWithReviewRow},
    ConnectionPool,
};

/// Column list shared by every booking read, joined with the booked
/// package's columns.
const BOOKING_COLUMNS: &str = r#"
    b.booking_id,
    b.user_id,
    b.tourist_id,
    b.booking_reference,
    b.booking_date,
    b.number_of_participants,
    b.total_amount,
    b.status,
    b.payment_method,
    b.payment_reference,
    b.contact_number,
    b.emergency_contact,
    b.emergency_phone,
    b.special_requests,
    b.admin_notes,
    b.cancellation_reason,
    b.cancellation_notes,
    b.cancelled_at,
    b.provider_confirmed_at,
    b.provider_completed_at,
    b.activity_completed,
    b.refund_processed,
    b.refund_processed_at,
    b.created_at,
    p.package_id,
    p.name AS package_name,
    p.activity_type,
    p.price AS package_price,
    p.duration_hours,
    p.max_participants
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<CreatedBooking> {
        let mut tx = self.db.begin().await?;

        // Booking requires a completed tourist profile.
        let tourist = sqlx::query_as::<_, (TouristId,)>(
            r#"
                SELECT tourist_id
                FROM tourists
                WHERE user_id = $1
                ORDER BY created_at DESC
                LIMIT 1
                ;
            "#,
        )
        .bind(event.requested_user)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        let Some((tourist_id,)) = tourist else {
            return Err(AppError::EntityNotFound(
                "Complete your tourist registration before booking.".into(),
            ));
        };

        let package = sqlx::query_as::<_, (Decimal, i32)>(
            r#"
                SELECT price, max_participants
                FROM packages
                WHERE package_id = $1
                ;
            "#,
        )
        .bind(event.package_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        let Some((price, max_participants)) = package else {
            return Err(AppError::EntityNotFound(format!(
                "Package ({}) not found.",
                event.package_id
            )));
        };

        if event.number_of_participants < 1 {
            return Err(AppError::UnprocessableEntity(
                "A booking needs at least one participant.".into(),
            ));
        }
        if event.number_of_participants > max_participants {
            return Err(AppError::CapacityExceeded(format!(
                "Package ({}) allows at most {} participants.",
                event.package_id, max_participants
            )));
        }

        // The stored total is always derived from the package price; the
        // client never supplies an amount.
        let total_amount = price * Decimal::from(event.number_of_participants);

        let booking_id = BookingId::new();
        let booking_reference = generate_booking_reference();
        let payment_reference = event
            .payment_method
            .needs_payment_reference()
            .then(generate_payment_reference);

        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, user_id, tourist_id, package_id,
                 booking_reference, booking_date, number_of_participants,
                 total_amount, status, payment_method, payment_reference,
                 contact_number, emergency_contact, emergency_phone,
                 special_requests)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending', $9, $10,
                        $11, $12, $13, $14)
                ;
            "#,
        )
        .bind(booking_id)
        .bind(event.requested_user)
        .bind(tourist_id)
        .bind(event.package_id)
        .bind(&booking_reference)
        .bind(event.booking_date)
        .bind(event.number_of_participants)
        .bind(total_amount)
        .bind(event.payment_method)
        .bind(&payment_reference)
        .bind(&event.contact_number)
        .bind(&event.emergency_contact)
        .bind(&event.emergency_phone)
        .bind(&event.special_requests)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(CreatedBooking {
            booking_id,
            booking_reference,
            payment_reference,
        })
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<()> {
        if event.cancellation_reason.trim().is_empty() {
            return Err(AppError::UnprocessableEntity(
                "A cancellation reason is required.".into(),
            ));
        }

        let mut tx = self.db.begin().await?;

        let state = self.fetch_state(&mut tx, event.booking_id).await?;

        if state.user_id != event.requested_user {
            return Err(AppError::ForbiddenOperation);
        }
        if !state.status.tourist_can_cancel() {
            return Err(AppError::InvalidStateTransition(format!(
                "A {} booking can no longer be cancelled by the tourist.",
                state.status.as_ref()
            )));
        }

        // The status predicate re-checks the pre-condition inside the
        // UPDATE so a concurrent transition loses cleanly.
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET
                    status = 'cancelled',
                    cancellation_reason = $1,
                    cancelled_at = NOW()
                WHERE booking_id = $2 AND status = 'pending'
                ;
            "#,
        )
        .bind(&event.cancellation_reason)
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::ConflictError(format!(
                "Booking ({}) was updated concurrently, please retry.",
                event.booking_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let state = self.fetch_state(&mut tx, event.booking_id).await?;
        check_operator(&event.operator, &state)?;

        if !state.status.can_transition_to(event.new_status) {
            return Err(AppError::InvalidStateTransition(format!(
                "A booking cannot move from {} to {}.",
                state.status.as_ref(), event.new_status.as_ref()
            )));
        }

        let query = match event.new_status {
            BookingStatus::Confirmed => sqlx::query(
                r#"
                    UPDATE bookings
                    SET
                        status = 'confirmed',
                        admin_notes = COALESCE($1, admin_notes),
                        provider_confirmed_at = NOW()
                    WHERE booking_id = $2 AND status = $3
                    ;
                "#,
            )
            .bind(&event.notes),
            BookingStatus::Completed => sqlx::query(
                r#"
                    UPDATE bookings
                    SET
                        status = 'completed',
                        admin_notes = COALESCE($1, admin_notes),
                        provider_completed_at = NOW(),
                        activity_completed = TRUE
                    WHERE booking_id = $2 AND status = $3
                    ;
                "#,
            )
            .bind(&event.notes),
            BookingStatus::Cancelled => sqlx::query(
                r#"
                    UPDATE bookings
                    SET
                        status = 'cancelled',
                        cancellation_reason = $1,
                        cancellation_notes = $2,
                        cancelled_at = NOW()
                    WHERE booking_id = $3 AND status = $4
                    ;
                "#,
            )
            .bind(&event.cancellation_reason)
            .bind(&event.notes),
            // Nothing transitions back to pending outside reactivation.
            BookingStatus::Pending => {
                return Err(AppError::InvalidStateTransition(
                    "A booking cannot be moved back to pending.".into(),
                ))
            }
        };

        let res = query
            .bind(event.booking_id)
            .bind(state.status)
            .execute(&mut *tx)
            .await
            .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::ConflictError(format!(
                "Booking ({}) was updated concurrently, please retry.",
                event.booking_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn reactivate(&self, event: ReactivateBooking) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let state = self.fetch_state(&mut tx, event.booking_id).await?;
        check_operator(&event.operator, &state)?;

        if state.status != BookingStatus::Cancelled {
            return Err(AppError::InvalidStateTransition(format!(
                "Only cancelled bookings can be reactivated, this one is {}.",
                state.status.as_ref()
            )));
        }
        if state.refund_processed {
            return Err(AppError::InvalidStateTransition(
                "The refund was already paid out, the booking cannot be reactivated.".into(),
            ));
        }
        if !matches!(
            event.new_status,
            BookingStatus::Pending | BookingStatus::Confirmed
        ) {
            return Err(AppError::InvalidStateTransition(format!(
                "A cancelled booking can only be reactivated to pending or confirmed, not {}.",
                event.new_status.as_ref()
            )));
        }

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET
                    status = $1,
                    cancellation_reason = NULL,
                    cancellation_notes = NULL,
                    cancelled_at = NULL,
                    provider_confirmed_at = CASE
                        WHEN $1 = 'confirmed'::booking_status THEN NOW()
                        ELSE NULL
                    END
                WHERE booking_id = $2 AND status = 'cancelled'
                ;
            "#,
        )
        .bind(event.new_status)
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::ConflictError(format!(
                "Booking ({}) was updated concurrently, please retry.",
                event.booking_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn mark_refund_processed(&self, event: MarkRefundProcessed) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let state = self.fetch_state(&mut tx, event.booking_id).await?;
        check_operator(&event.operator, &state)?;

        if state.status != BookingStatus::Cancelled {
            return Err(AppError::InvalidStateTransition(format!(
                "Refunds only apply to cancelled bookings, this one is {}.",
                state.status.as_ref()
            )));
        }

        // Re-marking keeps the original payout timestamp.
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET
                    refund_processed = TRUE,
                    refund_processed_at = COALESCE(refund_processed_at, NOW())
                WHERE booking_id = $1 AND status = 'cancelled'
                ;
            "#,
        )
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::ConflictError(format!(
                "Booking ({}) was updated concurrently, please retry.",
                event.booking_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_by_id(&self, booking_id: BookingId, user_id: UserId) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings AS b
                INNER JOIN packages AS p ON b.package_id = p.package_id
                WHERE b.booking_id = $1 AND b.user_id = $2
                ;
            "#
        ))
        .bind(booking_id)
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        row.map(Booking::from).ok_or_else(|| {
            AppError::EntityNotFound(format!("Booking ({booking_id}) not found."))
        })
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings AS b
                INNER JOIN packages AS p ON b.package_id = p.package_id
                WHERE b.user_id = $1
                ORDER BY b.created_at DESC
                ;
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::DbQueryError)
    }

    async fn find_by_user_with_reviews(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<BookingWithReview>> {
        sqlx::query_as::<_, BookingWithReviewRow>(&format!(
            r#"
                SELECT {BOOKING_COLUMNS},
                    o.user_id AS provider_id,
                    o.first_name || ' ' || o.last_name AS provider_name,
                    o.contact_number AS provider_contact,
                    o.email AS provider_email,
                    p.gcash_number AS provider_gcash_number,
                    p.gcash_name AS provider_gcash_name,
                    ur.review_id IS NOT NULL AS has_user_reviewed,
                    ur.rating AS user_rating,
                    ur.comment AS user_comment,
                    COALESCE(agg.review_count, 0) AS package_review_count,
                    COALESCE(agg.average_rating, 0) AS package_average_rating
                FROM bookings AS b
                INNER JOIN packages AS p ON b.package_id = p.package_id
                LEFT JOIN users AS o ON p.owned_by = o.user_id
                LEFT JOIN reviews AS ur ON ur.booking_id = b.booking_id
                LEFT JOIN (
                    SELECT package_id,
                        COUNT(*) AS review_count,
                        ROUND(AVG(rating), 1) AS average_rating
                    FROM reviews
                    GROUP BY package_id
                ) AS agg ON agg.package_id = p.package_id
                WHERE b.user_id = $1
                ORDER BY b.created_at DESC
                ;
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(BookingWithReview::from).collect())
        .map_err(AppError::DbQueryError)
    }

    async fn find_completed_for_review(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings AS b
                INNER JOIN packages AS p ON b.package_id = p.package_id
                WHERE b.user_id = $1 AND b.status = 'completed'
                ORDER BY b.created_at DESC
                ;
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::DbQueryError)
    }

    async fn find_by_status(&self, status: BookingStatus) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings AS b
                INNER JOIN packages AS p ON b.package_id = p.package_id
                WHERE b.status = $1
                ORDER BY b.created_at DESC
                ;
            "#
        ))
        .bind(status)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::DbQueryError)
    }

    async fn find_by_package_owner(&self, owner_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings AS b
                INNER JOIN packages AS p ON b.package_id = p.package_id
                WHERE p.owned_by = $1
                ORDER BY b.created_at DESC
                ;
            "#
        ))
        .bind(owner_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::DbQueryError)
    }
}

impl BookingRepositoryImpl {
    /// The minimal state every lifecycle mutation checks before it runs
    /// its conditional update.
    async fn fetch_state(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        booking_id: BookingId,
    ) -> AppResult<BookingStateRow> {
        sqlx::query_as::<_, BookingStateRow>(
            r#"
                SELECT
                    b.booking_id,
                    b.user_id,
                    p.owned_by AS package_owner,
                    b.status,
                    b.refund_processed
                FROM bookings AS b
                INNER JOIN packages AS p ON b.package_id = p.package_id
                WHERE b.booking_id = $1
                ;
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::DbQueryError)?
        .ok_or_else(|| AppError::EntityNotFound(format!("Booking ({booking_id}) not found.")))
    }
}

/// Admins act on any booking; activity providers only on bookings of their
/// own packages.
fn check_operator(operator: &BookingOperator, state: &BookingStateRow) -> AppResult<()> {
    if !operator.role.can_manage_bookings() {
        return Err(AppError::UnauthorizedError(
            "Only providers and admins manage booking statuses.".into(),
        ));
    }
    if !operator.role.is_admin() && operator.user_id != state.package_owner {
        return Err(AppError::ForbiddenOperation);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use kernel::model::role::Role;

    use super::*;
    use crate::repository::test_support::{booking_event, seed_package, seed_tourist, seed_user};

    fn state(owner: UserId) -> BookingStateRow {
        BookingStateRow {
            booking_id: BookingId::new(),
            user_id: UserId::new(),
            package_owner: owner,
            status: BookingStatus::Pending,
            refund_processed: false,
        }
    }

    #[test]
    fn tourists_cannot_operate_on_bookings() {
        let operator = BookingOperator::new(UserId::new(), Role::Tourist);
        assert!(matches!(
            check_operator(&operator, &state(UserId::new())),
            Err(AppError::UnauthorizedError(_))
        ));
    }

    #[test]
    fn providers_only_operate_on_their_own_packages() {
        let owner = UserId::new();
        let operator = BookingOperator::new(owner, Role::ActivityProvider);
        assert!(check_operator(&operator, &state(owner)).is_ok());

        let stranger = BookingOperator::new(UserId::new(), Role::ActivityProvider);
        assert!(matches!(
            check_operator(&stranger, &state(owner)),
            Err(AppError::ForbiddenOperation)
        ));
    }

    #[test]
    fn admins_operate_on_any_booking() {
        let operator = BookingOperator::new(UserId::new(), Role::Admin);
        assert!(check_operator(&operator, &state(UserId::new())).is_ok());
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn booking_requires_a_tourist_profile(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let tourist_user = seed_user(&db, "maria", Role::Tourist).await?;
        let provider = seed_user(&db, "pedro", Role::ActivityProvider).await?;
        let package_id = seed_package(&db, provider, 4).await?;

        let repo = BookingRepositoryImpl::new(db);
        let res = repo
            .create(booking_event(tourist_user, package_id, 2))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn participants_beyond_capacity_are_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let tourist_user = seed_user(&db, "maria", Role::Tourist).await?;
        seed_tourist(&db, tourist_user).await?;
        let provider = seed_user(&db, "pedro", Role::ActivityProvider).await?;
        let package_id = seed_package(&db, provider, 4).await?;

        let repo = BookingRepositoryImpl::new(db);
        let res = repo
            .create(booking_event(tourist_user, package_id, 5))
            .await;
        assert!(matches!(res, Err(AppError::CapacityExceeded(_))));

        let created = repo
            .create(booking_event(tourist_user, package_id, 2))
            .await?;
        let booking = repo.find_by_id(created.booking_id, tourist_user).await?;
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_amount, Decimal::new(300000, 2));
        assert!(booking.booking_reference.starts_with("GG"));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn tourist_cancellation_is_only_allowed_from_pending(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let tourist_user = seed_user(&db, "maria", Role::Tourist).await?;
        seed_tourist(&db, tourist_user).await?;
        let provider = seed_user(&db, "pedro", Role::ActivityProvider).await?;
        let package_id = seed_package(&db, provider, 4).await?;

        let repo = BookingRepositoryImpl::new(db);
        let operator = BookingOperator::new(provider, Role::ActivityProvider);

        let first = repo
            .create(booking_event(tourist_user, package_id, 2))
            .await?;
        repo.update_status(UpdateBookingStatus::new(
            first.booking_id,
            operator,
            BookingStatus::Confirmed,
            None,
            None,
        ))
        .await?;
        let res = repo
            .cancel(CancelBooking::new(
                first.booking_id,
                tourist_user,
                "changed plans".into(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::InvalidStateTransition(_))));

        let confirmed = repo.find_by_id(first.booking_id, tourist_user).await?;
        assert_eq!(confirmed.status, BookingStatus::Confirmed);
        assert!(confirmed.provider_confirmed_at.is_some());

        let second = repo
            .create(booking_event(tourist_user, package_id, 2))
            .await?;
        repo.cancel(CancelBooking::new(
            second.booking_id,
            tourist_user,
            "changed plans".into(),
        ))
        .await?;
        let cancelled = repo.find_by_id(second.booking_id, tourist_user).await?;
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert_eq!(
            cancelled.cancellation_reason.as_deref(),
            Some("changed plans")
        );
        assert!(cancelled.cancelled_at.is_some());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn refund_marking_is_idempotent_and_blocks_reactivation(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let tourist_user = seed_user(&db, "maria", Role::Tourist).await?;
        seed_tourist(&db, tourist_user).await?;
        let provider = seed_user(&db, "pedro", Role::ActivityProvider).await?;
        let package_id = seed_package(&db, provider, 4).await?;

        let repo = BookingRepositoryImpl::new(db);
        let operator = BookingOperator::new(provider, Role::ActivityProvider);
        let created = repo
            .create(booking_event(tourist_user, package_id, 2))
            .await?;
        repo.update_status(UpdateBookingStatus::new(
            created.booking_id,
            operator,
            BookingStatus::Cancelled,
            None,
            Some("no boat available".into()),
        ))
        .await?;

        repo.mark_refund_processed(MarkRefundProcessed::new(created.booking_id, operator))
            .await?;
        let first = repo.find_by_id(created.booking_id, tourist_user).await?;
        assert!(first.refund_processed);
        assert!(first.refund_processed_at.is_some());

        repo.mark_refund_processed(MarkRefundProcessed::new(created.booking_id, operator))
            .await?;
        let second = repo.find_by_id(created.booking_id, tourist_user).await?;
        assert_eq!(first.refund_processed_at, second.refund_processed_at);

        let res = repo
            .reactivate(ReactivateBooking::new(
                created.booking_id,
                operator,
                BookingStatus::Pending,
            ))
            .await;
        assert!(matches!(res, Err(AppError::InvalidStateTransition(_))));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn a_lost_cancellation_race_surfaces_as_conflict(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool.clone());
        let tourist_user = seed_user(&db, "maria", Role::Tourist).await?;
        seed_tourist(&db, tourist_user).await?;
        let provider = seed_user(&db, "pedro", Role::ActivityProvider).await?;
        let package_id = seed_package(&db, provider, 4).await?;

        let repo = BookingRepositoryImpl::new(db.clone());
        let created = repo
            .create(booking_event(tourist_user, package_id, 2))
            .await?;
        let booking_id = created.booking_id;

        // An uncommitted confirmation holds the row lock: the cancel's
        // pre-check still sees `pending`, then its conditional update
        // waits on the lock and matches zero rows once it clears.
        let mut tx = pool.begin().await?;
        sqlx::query("UPDATE bookings SET status = 'confirmed' WHERE booking_id = $1")
            .bind(booking_id)
            .execute(&mut *tx)
            .await?;

        let cancel = tokio::spawn(async move {
            repo.cancel(CancelBooking::new(
                booking_id,
                tourist_user,
                "changed plans".into(),
            ))
            .await
        });
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        tx.commit().await?;

        let res = cancel.await?;
        assert!(matches!(res, Err(AppError::ConflictError(_))));
        Ok(())
    }
}
