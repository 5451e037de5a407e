use axum::{extract::State, Json};

use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::stats::{BookingStatsResponse, MonthlyIncomesResponse, ReviewStatsResponse},
};

pub async fn show_booking_stats(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingStatsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let stats = registry.stats_repository().booking_stats().await?;

    Ok(Json(BookingStatsResponse::from(stats)))
}

pub async fn show_review_stats(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewStatsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let stats = registry.stats_repository().review_stats().await?;

    Ok(Json(ReviewStatsResponse::from(stats)))
}

/// The calling provider's trailing-12-months confirmed/completed income.
pub async fn show_provider_monthly_income(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MonthlyIncomesResponse>> {
    if !user.is_activity_provider() && !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let income = registry
        .stats_repository()
        .provider_monthly_income(user.id())
        .await?;

    Ok(Json(MonthlyIncomesResponse::from(income)))
}
