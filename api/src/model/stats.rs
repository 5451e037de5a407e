use rust_decimal::Decimal;
use serde::Serialize;

use kernel::model::stats::{
    BookingOverview, BookingStats, MonthlyBookings, MonthlyIncome, MonthlyReviews,
    PopularPackage, ReviewStats, TopRatedPackage,
};

use crate::model::{package::ActivityTypeName, review::RatingSummaryResponse};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOverviewResponse {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub completed_bookings: i64,
    pub cancelled_bookings: i64,
    pub total_revenue: Decimal,
    pub average_booking_value: Decimal,
}

impl From<BookingOverview> for BookingOverviewResponse {
    fn from(value: BookingOverview) -> Self {
        let BookingOverview {
            total_bookings,
            pending_bookings,
            confirmed_bookings,
            completed_bookings,
            cancelled_bookings,
            total_revenue,
            average_booking_value,
        } = value;
        Self {
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBookingsResponse {
    pub month_year: String,
    pub month: String,
    pub booking_count: i64,
    pub monthly_revenue: Decimal,
}

impl From<MonthlyBookings> for MonthlyBookingsResponse {
    fn from(value: MonthlyBookings) -> Self {
        let MonthlyBookings {
            month_year,
            month,
            booking_count,
            monthly_revenue,
        } = value;
        Self {
            month_year,
            month,
            booking_count,
            monthly_revenue,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularPackageResponse {
    pub name: String,
    pub activity_type: ActivityTypeName,
    pub booking_count: i64,
    pub total_revenue: Decimal,
}

impl From<PopularPackage> for PopularPackageResponse {
    fn from(value: PopularPackage) -> Self {
        let PopularPackage {
            name,
            activity_type,
            booking_count,
            total_revenue,
        } = value;
        Self {
            name,
            activity_type: activity_type.into(),
            booking_count,
            total_revenue,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatsResponse {
    pub overall: BookingOverviewResponse,
    pub monthly: Vec<MonthlyBookingsResponse>,
    pub popular_packages: Vec<PopularPackageResponse>,
}

impl From<BookingStats> for BookingStatsResponse {
    fn from(value: BookingStats) -> Self {
        let BookingStats {
            overall,
            monthly,
            popular_packages,
        } = value;
        Self {
            overall: overall.into(),
            monthly: monthly.into_iter().map(MonthlyBookingsResponse::from).collect(),
            popular_packages: popular_packages
                .into_iter()
                .map(PopularPackageResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReviewsResponse {
    pub month_year: String,
    pub month: String,
    pub review_count: i64,
    pub average_rating: Decimal,
}

impl From<MonthlyReviews> for MonthlyReviewsResponse {
    fn from(value: MonthlyReviews) -> Self {
        let MonthlyReviews {
            month_year,
            month,
            review_count,
            average_rating,
        } = value;
        Self {
            month_year,
            month,
            review_count,
            average_rating,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRatedPackageResponse {
    pub name: String,
    pub activity_type: ActivityTypeName,
    pub review_count: i64,
    pub average_rating: Decimal,
}

impl From<TopRatedPackage> for TopRatedPackageResponse {
    fn from(value: TopRatedPackage) -> Self {
        let TopRatedPackage {
            name,
            activity_type,
            review_count,
            average_rating,
        } = value;
        Self {
            name,
            activity_type: activity_type.into(),
            review_count,
            average_rating,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStatsResponse {
    pub overall: RatingSummaryResponse,
    pub monthly: Vec<MonthlyReviewsResponse>,
    pub top_packages: Vec<TopRatedPackageResponse>,
}

impl From<ReviewStats> for ReviewStatsResponse {
    fn from(value: ReviewStats) -> Self {
        let ReviewStats {
            overall,
            monthly,
            top_packages,
        } = value;
        Self {
            overall: overall.into(),
            monthly: monthly.into_iter().map(MonthlyReviewsResponse::from).collect(),
            top_packages: top_packages
                .into_iter()
                .map(TopRatedPackageResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyIncomeResponse {
    pub month_year: String,
    pub booking_count: i64,
    pub total_income: Decimal,
}

impl From<MonthlyIncome> for MonthlyIncomeResponse {
    fn from(value: MonthlyIncome) -> Self {
        let MonthlyIncome {
            month_year,
            booking_count,
            total_income,
        } = value;
        Self {
            month_year,
            booking_count,
            total_income,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyIncomesResponse {
    pub items: Vec<MonthlyIncomeResponse>,
}

impl From<Vec<MonthlyIncome>> for MonthlyIncomesResponse {
    fn from(value: Vec<MonthlyIncome>) -> Self {
        Self {
            items: value.into_iter().map(MonthlyIncomeResponse::from).collect(),
        }
    }
}
