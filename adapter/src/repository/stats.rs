use async_trait::async_trait;
use derive_new::new;

use kernel::model::{
    id::UserId,
    stats::{
        BookingStats, MonthlyBookings, MonthlyIncome, MonthlyReviews, PopularPackage,
        ReviewStats, TopRatedPackage,
    },
};
use kernel::repository::stats::StatsRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{
        review::RatingSummaryRow,
        stats::{
            BookingOverviewRow, MonthlyBookingsRow, MonthlyIncomeRow, MonthlyReviewsRow,
            PopularPackageRow, TopRatedPackageRow,
        },
    },
    ConnectionPool,
};

#[derive(new)]
pub struct StatsRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl StatsRepository for StatsRepositoryImpl {
    async fn booking_stats(&self) -> AppResult<BookingStats> {
        // COUNT and COALESCE keep every rollup zero-filled on an empty
        // table instead of erroring or returning NULL.
        let overall = sqlx::query_as::<_, BookingOverviewRow>(
            r#"
                SELECT
                    COUNT(*) AS total_bookings,
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending_bookings,
                    COUNT(*) FILTER (WHERE status = 'confirmed') AS confirmed_bookings,
                    COUNT(*) FILTER (WHERE status = 'completed') AS completed_bookings,
                    COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled_bookings,
                    COALESCE(SUM(total_amount), 0) AS total_revenue,
                    COALESCE(ROUND(AVG(total_amount), 2), 0) AS average_booking_value
                FROM bookings
                ;
            "#,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        let monthly = sqlx::query_as::<_, MonthlyBookingsRow>(
            r#"
                SELECT
                    TO_CHAR(created_at, 'YYYY-MM') AS month_year,
                    TO_CHAR(created_at, 'Mon YYYY') AS month,
                    COUNT(*) AS booking_count,
                    COALESCE(SUM(total_amount), 0) AS monthly_revenue
                FROM bookings
                WHERE created_at >= NOW() - INTERVAL '12 months'
                GROUP BY 1, 2
                ORDER BY 1
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        let popular = sqlx::query_as::<_, PopularPackageRow>(
            r#"
                SELECT
                    p.name,
                    p.activity_type,
                    COUNT(b.booking_id) AS booking_count,
                    COALESCE(SUM(b.total_amount), 0) AS total_revenue
                FROM bookings AS b
                INNER JOIN packages AS p ON b.package_id = p.package_id
                GROUP BY p.package_id, p.name, p.activity_type
                ORDER BY booking_count DESC, total_revenue DESC
                LIMIT 10
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(BookingStats {
            overall: overall.into(),
            monthly: monthly.into_iter().map(MonthlyBookings::from).collect(),
            popular_packages: popular.into_iter().map(PopularPackage::from).collect(),
        })
    }

    async fn review_stats(&self) -> AppResult<ReviewStats> {
        let overall = sqlx::query_as::<_, RatingSummaryRow>(
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
                ;
            "#,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        let monthly = sqlx::query_as::<_, MonthlyReviewsRow>(
            r#"
                SELECT
                    TO_CHAR(created_at, 'YYYY-MM') AS month_year,
                    TO_CHAR(created_at, 'Mon YYYY') AS month,
                    COUNT(*) AS review_count,
                    COALESCE(ROUND(AVG(rating), 1), 0) AS average_rating
                FROM reviews
                WHERE created_at >= NOW() - INTERVAL '12 months'
                GROUP BY 1, 2
                ORDER BY 1
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        let top = sqlx::query_as::<_, TopRatedPackageRow>(
            r#"
                SELECT
                    p.name,
                    p.activity_type,
                    COUNT(*) AS review_count,
                    ROUND(AVG(r.rating), 1) AS average_rating
                FROM reviews AS r
                INNER JOIN packages AS p ON r.package_id = p.package_id
                GROUP BY p.package_id, p.name, p.activity_type
                ORDER BY average_rating DESC, review_count DESC
                LIMIT 10
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(ReviewStats {
            overall: overall.into(),
            monthly: monthly.into_iter().map(MonthlyReviews::from).collect(),
            top_packages: top.into_iter().map(TopRatedPackage::from).collect(),
        })
    }

    async fn provider_monthly_income(&self, owner_id: UserId) -> AppResult<Vec<MonthlyIncome>> {
        // Pending and cancelled bookings never count as income.
        sqlx::query_as::<_, MonthlyIncomeRow>(
            r#"
                SELECT
                    TO_CHAR(b.created_at, 'YYYY-MM') AS month_year,
                    COUNT(*) AS booking_count,
                    COALESCE(SUM(b.total_amount), 0) AS total_income
                FROM bookings AS b
                INNER JOIN packages AS p ON b.package_id = p.package_id
                WHERE p.owned_by = $1
                  AND b.status IN ('confirmed', 'completed')
                  AND b.created_at >= NOW() - INTERVAL '12 months'
                GROUP BY 1
                ORDER BY 1
                ;
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(MonthlyIncome::from).collect())
        .map_err(AppError::DbQueryError)
    }
}
