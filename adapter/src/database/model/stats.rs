use rust_decimal::Decimal;
use sqlx::FromRow;

use kernel::model::{
    package::ActivityType,
    stats::{BookingOverview, MonthlyBookings, MonthlyIncome, MonthlyReviews, PopularPackage, TopRatedPackage},
};

#[derive(FromRow)]
pub struct BookingOverviewRow {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub completed_bookings: i64,
    pub cancelled_bookings: i64,
    pub total_revenue: Decimal,
    pub average_booking_value: Decimal,
}

impl From<BookingOverviewRow> for BookingOverview {
    fn from(value: BookingOverviewRow) -> Self {
        let BookingOverviewRow {
            total_bookings,
            pending_bookings,
            confirmed_bookings,
            completed_bookings,
            cancelled_bookings,
            total_revenue,
            average_booking_value,
        } = value;
        BookingOverview {
            total_bookings,
            pending_bookings,
            confirmed_bookings,
            completed_bookings,
            cancelled_bookings,
            total_revenue,
            average_booking_value,
        }
    }
}

#[derive(FromRow)]
pub struct MonthlyBookingsRow {
    pub month_year: String,
    pub month: String,
    pub booking_count: i64,
    pub monthly_revenue: Decimal,
}

impl From<MonthlyBookingsRow> for MonthlyBookings {
    fn from(value: MonthlyBookingsRow) -> Self {
        let MonthlyBookingsRow {
            month_year,
            month,
            booking_count,
            monthly_revenue,
        } = value;
        MonthlyBookings {
            month_year,
            month,
            booking_count,
            monthly_revenue,
        }
    }
}

#[derive(FromRow)]
pub struct PopularPackageRow {
    pub name: String,
    pub activity_type: ActivityType,
    pub booking_count: i64,
    pub total_revenue: Decimal,
}

impl From<PopularPackageRow> for PopularPackage {
    fn from(value: PopularPackageRow) -> Self {
        let PopularPackageRow {
            name,
            activity_type,
            booking_count,
            total_revenue,
        } = value;
        PopularPackage {
            name,
            activity_type,
            booking_count,
            total_revenue,
        }
    }
}

#[derive(FromRow)]
pub struct MonthlyReviewsRow {
    pub month_year: String,
    pub month: String,
    pub review_count: i64,
    pub average_rating: Decimal,
}

impl From<MonthlyReviewsRow> for MonthlyReviews {
    fn from(value: MonthlyReviewsRow) -> Self {
        let MonthlyReviewsRow {
            month_year,
            month,
            review_count,
            average_rating,
        } = value;
        MonthlyReviews {
            month_year,
            month,
            review_count,
            average_rating,
        }
    }
}

#[derive(FromRow)]
pub struct TopRatedPackageRow {
    pub name: String,
    pub activity_type: ActivityType,
    pub review_count: i64,
    pub average_rating: Decimal,
}

impl From<TopRatedPackageRow> for TopRatedPackage {
    fn from(value: TopRatedPackageRow) -> Self {
        let TopRatedPackageRow {
            name,
            activity_type,
            review_count,
            average_rating,
        } = value;
        TopRatedPackage {
            name,
            activity_type,
            review_count,
            average_rating,
        }
    }
}

#[derive(FromRow)]
pub struct MonthlyIncomeRow {
    pub month_year: String,
    pub booking_count: i64,
    pub total_income: Decimal,
}

impl From<MonthlyIncomeRow> for MonthlyIncome {
    fn from(value: MonthlyIncomeRow) -> Self {
        let MonthlyIncomeRow {
            month_year,
            booking_count,
            total_income,
        } = value;
        MonthlyIncome {
            month_year,
            booking_count,
            total_income,
        }
    }
}
