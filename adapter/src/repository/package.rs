use async_trait::async_trait;
use derive_new::new;

use kernel::model::{
    id::{PackageId, UserId},
    package::{
        event::{CreatePackage, DeletePackage, UpdatePackage},
        Package, PackageWithStats,
    },
};
use kernel::repository::package::PackageRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::package::{PackageRow, PackageWithStatsRow},
    ConnectionPool,
};

/// Column list shared by every package read, joined with the owning
/// provider's user record.
const PACKAGE_COLUMNS: &str = r#"
    p.package_id,
    p.name,
    p.activity_type,
    p.description,
    p.price,
    p.duration_hours,
    p.max_participants,
    p.includes,
    p.image,
    p.gcash_number,
    p.gcash_name,
    p.created_at,
    o.user_id AS owner_id,
    o.first_name AS owner_first_name,
    o.last_name AS owner_last_name,
    o.contact_number AS owner_contact_number,
    o.email AS owner_email
"#;

#[derive(new)]
pub struct PackageRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PackageRepository for PackageRepositoryImpl {
    async fn create(&self, event: CreatePackage) -> AppResult<PackageId> {
        let package_id = PackageId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO packages
                (package_id, owned_by, name, activity_type, description,
                 price, duration_hours, max_participants, includes, image,
                 gcash_number, gcash_name)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                ;
            "#,
        )
        .bind(package_id)
        .bind(event.owned_by)
        .bind(&event.name)
        .bind(event.activity_type)
        .bind(&event.description)
        .bind(event.price)
        .bind(event.duration_hours)
        .bind(event.max_participants)
        .bind(&event.includes)
        .bind(&event.image)
        .bind(&event.gcash_number)
        .bind(&event.gcash_name)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No package record has been created".into(),
            ));
        }

        Ok(package_id)
    }

    async fn update(&self, event: UpdatePackage) -> AppResult<()> {
        if event.patch.is_empty() {
            return Err(AppError::UnprocessableEntity(
                "No package fields to update.".into(),
            ));
        }

        let mut tx = self.db.begin().await?;

        self.check_ownership(&mut tx, event.package_id, event.requested_user)
            .await?;

        let patch = event.patch;
        let res = sqlx::query(
            r#"
                UPDATE packages
                SET
                    name = COALESCE($1, name),
                    activity_type = COALESCE($2, activity_type),
                    description = COALESCE($3, description),
                    price = COALESCE($4, price),
                    duration_hours = COALESCE($5, duration_hours),
                    max_participants = COALESCE($6, max_participants),
                    includes = COALESCE($7, includes),
                    image = COALESCE($8, image),
                    gcash_number = COALESCE($9, gcash_number),
                    gcash_name = COALESCE($10, gcash_name)
                WHERE package_id = $11 AND owned_by = $12
                ;
            "#,
        )
        .bind(patch.name)
        .bind(patch.activity_type)
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.duration_hours)
        .bind(patch.max_participants)
        .bind(patch.includes)
        .bind(patch.image)
        .bind(patch.gcash_number)
        .bind(patch.gcash_name)
        .bind(event.package_id)
        .bind(event.requested_user)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No package record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn delete(&self, event: DeletePackage) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.check_ownership(&mut tx, event.package_id, event.requested_user)
            .await?;

        // Deletion is refused while the package still has bookings in
        // flight. Completed and cancelled bookings go with the package.
        let (active_bookings,) = sqlx::query_as::<_, (i64,)>(
            r#"
                SELECT COUNT(*)
                FROM bookings
                WHERE package_id = $1
                  AND status IN ('pending', 'confirmed')
                ;
            "#,
        )
        .bind(event.package_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        if active_bookings > 0 {
            return Err(AppError::InvalidStateTransition(format!(
                "Package ({}) still has {} active booking(s) and cannot be deleted.",
                event.package_id, active_bookings
            )));
        }

        let res = sqlx::query(
            r#"
                DELETE FROM packages
                WHERE package_id = $1 AND owned_by = $2
                ;
            "#,
        )
        .bind(event.package_id)
        .bind(event.requested_user)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No package record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_by_id(&self, package_id: PackageId) -> AppResult<Option<Package>> {
        let row = sqlx::query_as::<_, PackageRow>(&format!(
            r#"
                SELECT {PACKAGE_COLUMNS}
                FROM packages AS p
                INNER JOIN users AS o ON p.owned_by = o.user_id
                WHERE p.package_id = $1
                ;
            "#
        ))
        .bind(package_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(row.map(Package::from))
    }

    async fn find_all(&self) -> AppResult<Vec<PackageWithStats>> {
        sqlx::query_as::<_, PackageWithStatsRow>(&format!(
            r#"
                SELECT {PACKAGE_COLUMNS},
                    COALESCE(agg.review_count, 0) AS review_count,
                    COALESCE(agg.average_rating, 0) AS average_rating
                FROM packages AS p
                INNER JOIN users AS o ON p.owned_by = o.user_id
                LEFT JOIN (
                    SELECT package_id,
                        COUNT(*) AS review_count,
                        ROUND(AVG(rating), 1) AS average_rating
                    FROM reviews
                    GROUP BY package_id
                ) AS agg ON agg.package_id = p.package_id
                ORDER BY p.created_at DESC
                ;
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(PackageWithStats::from).collect())
        .map_err(AppError::DbQueryError)
    }

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Package>> {
        sqlx::query_as::<_, PackageRow>(&format!(
            r#"
                SELECT {PACKAGE_COLUMNS}
                FROM packages AS p
                INNER JOIN users AS o ON p.owned_by = o.user_id
                WHERE p.owned_by = $1
                ORDER BY p.created_at DESC
                ;
            "#
        ))
        .bind(owner_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Package::from).collect())
        .map_err(AppError::DbQueryError)
    }
}

impl PackageRepositoryImpl {
    /// The package must exist and belong to the requesting provider before
    /// any mutation proceeds.
    async fn check_ownership(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        package_id: PackageId,
        requested_user: UserId,
    ) -> AppResult<()> {
        let row = sqlx::query_as::<_, (UserId,)>(
            r#"
                SELECT owned_by
                FROM packages
                WHERE package_id = $1
                ;
            "#,
        )
        .bind(package_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::DbQueryError)?;

        let Some((owned_by,)) = row else {
            return Err(AppError::EntityNotFound(format!(
                "Package ({package_id}) not found."
            )));
        };

        if owned_by != requested_user {
            return Err(AppError::ForbiddenOperation);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::{
        booking::{
            event::{BookingOperator, UpdateBookingStatus},
            BookingStatus,
        },
        role::Role,
    };
    use kernel::repository::booking::BookingRepository;

    use super::*;
    use crate::repository::{
        booking::BookingRepositoryImpl,
        test_support::{booking_event, seed_package, seed_tourist, seed_user},
    };

    #[sqlx::test(migrations = "../migrations")]
    async fn deletion_is_blocked_by_active_bookings(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let tourist_user = seed_user(&db, "maria", Role::Tourist).await?;
        seed_tourist(&db, tourist_user).await?;
        let provider = seed_user(&db, "pedro", Role::ActivityProvider).await?;
        let package_id = seed_package(&db, provider, 4).await?;

        let bookings = BookingRepositoryImpl::new(db.clone());
        let created = bookings
            .create(booking_event(tourist_user, package_id, 2))
            .await?;

        let packages = PackageRepositoryImpl::new(db.clone());
        let res = packages
            .delete(DeletePackage::new(package_id, provider))
            .await;
        assert!(matches!(res, Err(AppError::InvalidStateTransition(_))));

        // A stranger never even reaches the active-booking check.
        let other = seed_user(&db, "juan", Role::ActivityProvider).await?;
        let res = packages.delete(DeletePackage::new(package_id, other)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));

        let operator = BookingOperator::new(provider, Role::ActivityProvider);
        bookings
            .update_status(UpdateBookingStatus::new(
                created.booking_id,
                operator,
                BookingStatus::Cancelled,
                None,
                Some("no boat available".into()),
            ))
            .await?;

        packages
            .delete(DeletePackage::new(package_id, provider))
            .await?;
        assert!(packages.find_by_id(package_id).await?.is_none());
        Ok(())
    }
}
