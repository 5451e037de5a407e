use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{PackageId, UserId},
    package::{
        event::{CreatePackage, DeletePackage, UpdatePackage},
        Package, PackageWithStats,
    },
};

#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn create(&self, event: CreatePackage) -> AppResult<PackageId>;

    /// Owner-scoped partial update driven by an explicit field patch.
    async fn update(&self, event: UpdatePackage) -> AppResult<()>;

    /// Owner-scoped deletion, blocked while pending or confirmed bookings
    /// reference the package.
    async fn delete(&self, event: DeletePackage) -> AppResult<()>;

    async fn find_by_id(&self, package_id: PackageId) -> AppResult<Option<Package>>;

    /// Public listing with review aggregates.
    async fn find_all(&self) -> AppResult<Vec<PackageWithStats>>;

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Package>>;
}
