use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;

use kernel::model::{
    id::PackageId,
    package::event::{DeletePackage, UpdatePackage},
    review::event::ReviewListFilter,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        package::{
            CreatePackageRequest, PackageResponse, PackagesResponse, UpdatePackageRequest,
        },
        review::{PackageReviewsResponse, ReviewListQuery},
    },
};

pub async fn register_package(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePackageRequest>,
) -> AppResult<impl IntoResponse> {
    if !user.is_activity_provider() && !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let package_id = registry
        .package_repository()
        .create(req.into_create_package(user.id()))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "packageId": package_id })),
    ))
}

/// Public catalogue: packages with their review aggregates.
pub async fn show_package_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PackagesResponse>> {
    let packages = registry.package_repository().find_all().await?;

    Ok(Json(PackagesResponse::from(packages)))
}

pub async fn show_package(
    Path(package_id): Path<PackageId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PackageResponse>> {
    let package = registry
        .package_repository()
        .find_by_id(package_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("Package ({package_id}) not found.")))?;

    Ok(Json(PackageResponse::from(package)))
}

/// Public review listing for one package, optionally filtered to a star
/// value.
pub async fn show_package_reviews(
    Path(package_id): Path<PackageId>,
    Query(query): Query<ReviewListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PackageReviewsResponse>> {
    let reviews = registry
        .review_repository()
        .find_for_package(
            package_id,
            ReviewListFilter {
                rating: query.rating,
            },
        )
        .await?;

    Ok(Json(PackageReviewsResponse::from(reviews)))
}

pub async fn show_owned_packages(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<PackageResponse>>> {
    if !user.is_activity_provider() && !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let packages = registry
        .package_repository()
        .find_by_owner(user.id())
        .await?;

    Ok(Json(
        packages.into_iter().map(PackageResponse::from).collect(),
    ))
}

pub async fn update_package(
    user: AuthorizedUser,
    Path(package_id): Path<PackageId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdatePackageRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .package_repository()
        .update(UpdatePackage::new(package_id, user.id(), req.into()))
        .await?;

    Ok(StatusCode::OK)
}

pub async fn delete_package(
    user: AuthorizedUser,
    Path(package_id): Path<PackageId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .package_repository()
        .delete(DeletePackage::new(package_id, user.id()))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
