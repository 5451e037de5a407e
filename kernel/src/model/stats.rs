use rust_decimal::Decimal;

use crate::model::{package::ActivityType, review::RatingSummary};

/// Booking totals by status with revenue rollups. Zero bookings yields the
/// all-zero struct.
#[derive(Debug, Default)]
pub struct BookingOverview {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub completed_bookings: i64,
    pub cancelled_bookings: i64,
    pub total_revenue: Decimal,
    pub average_booking_value: Decimal,
}

/// One calendar month of the trailing-12-months booking trend.
#[derive(Debug)]
pub struct MonthlyBookings {
    /// `YYYY-MM`, the grouping key.
    pub month_year: String,
    /// `Mon YYYY`, for display.
    pub month: String,
    pub booking_count: i64,
    pub monthly_revenue: Decimal,
}

#[derive(Debug)]
pub struct PopularPackage {
    pub name: String,
    pub activity_type: ActivityType,
    pub booking_count: i64,
    pub total_revenue: Decimal,
}

#[derive(Debug, Default)]
pub struct BookingStats {
    pub overall: BookingOverview,
    pub monthly: Vec<MonthlyBookings>,
    pub popular_packages: Vec<PopularPackage>,
}

#[derive(Debug)]
pub struct MonthlyReviews {
    pub month_year: String,
    pub month: String,
    pub review_count: i64,
    pub average_rating: Decimal,
}

#[derive(Debug)]
pub struct TopRatedPackage {
    pub name: String,
    pub activity_type: ActivityType,
    pub review_count: i64,
    pub average_rating: Decimal,
}

#[derive(Debug, Default)]
pub struct ReviewStats {
    pub overall: RatingSummary,
    pub monthly: Vec<MonthlyReviews>,
    pub top_packages: Vec<TopRatedPackage>,
}

/// One month of confirmed/completed revenue for a single provider.
#[derive(Debug)]
pub struct MonthlyIncome {
    pub month_year: String,
    pub booking_count: i64,
    pub total_income: Decimal,
}
