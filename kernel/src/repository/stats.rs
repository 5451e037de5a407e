use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    stats::{BookingStats, MonthlyIncome, ReviewStats},
};

/// Read-side rollups over the booking and review tables. Every query must
/// come back zero-filled, not erroring, when the tables are empty.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn booking_stats(&self) -> AppResult<BookingStats>;

    async fn review_stats(&self) -> AppResult<ReviewStats>;

    /// Trailing 12 months of confirmed/completed revenue for one
    /// provider's packages.
    async fn provider_monthly_income(&self, owner_id: UserId) -> AppResult<Vec<MonthlyIncome>>;
}
