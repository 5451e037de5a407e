use chrono::{DateTime, Utc};
use garde::Validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kernel::model::{
    id::{PackageId, UserId},
    package::{
        event::{CreatePackage, PackagePatch},
        ActivityType, Package, PackageWithStats,
    },
};

use crate::model::user::PackageOwnerResponse;

/// JSON representation of the activity enum, using the same display names
/// the store does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityTypeName {
    #[serde(rename = "Island Hopping")]
    IslandHopping,
    Snorkeling,
}

impl From<ActivityType> for ActivityTypeName {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::IslandHopping => ActivityTypeName::IslandHopping,
            ActivityType::Snorkeling => ActivityTypeName::Snorkeling,
        }
    }
}

impl From<ActivityTypeName> for ActivityType {
    fn from(value: ActivityTypeName) -> Self {
        match value {
            ActivityTypeName::IslandHopping => ActivityType::IslandHopping,
            ActivityTypeName::Snorkeling => ActivityType::Snorkeling,
        }
    }
}

fn non_negative_price(price: &Decimal, _ctx: &()) -> garde::Result {
    if price.is_sign_negative() {
        return Err(garde::Error::new("price must not be negative"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub activity_type: ActivityTypeName,
    #[garde(length(min = 1))]
    pub description: String,
    #[garde(custom(non_negative_price))]
    pub price: Decimal,
    #[garde(range(min = 1))]
    pub duration_hours: i32,
    #[garde(range(min = 1))]
    pub max_participants: i32,
    #[garde(skip)]
    pub includes: String,
    #[garde(skip)]
    pub image: Option<String>,
    #[garde(skip)]
    pub gcash_number: Option<String>,
    #[garde(skip)]
    pub gcash_name: Option<String>,
}

impl CreatePackageRequest {
    pub fn into_create_package(self, owned_by: UserId) -> CreatePackage {
        let CreatePackageRequest {
            name,
            activity_type,
            description,
            price,
            duration_hours,
            max_participants,
            includes,
            image,
            gcash_number,
            gcash_name,
        } = self;
        CreatePackage {
            owned_by,
            name,
            activity_type: activity_type.into(),
            description,
            price,
            duration_hours,
            max_participants,
            includes,
            image,
            gcash_number,
            gcash_name,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackageRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(skip)]
    pub activity_type: Option<ActivityTypeName>,
    #[garde(inner(length(min = 1)))]
    pub description: Option<String>,
    #[garde(inner(custom(non_negative_price)))]
    pub price: Option<Decimal>,
    #[garde(inner(range(min = 1)))]
    pub duration_hours: Option<i32>,
    #[garde(inner(range(min = 1)))]
    pub max_participants: Option<i32>,
    #[garde(skip)]
    pub includes: Option<String>,
    #[garde(skip)]
    pub image: Option<String>,
    #[garde(skip)]
    pub gcash_number: Option<String>,
    #[garde(skip)]
    pub gcash_name: Option<String>,
}

impl From<UpdatePackageRequest> for PackagePatch {
    fn from(value: UpdatePackageRequest) -> Self {
        let UpdatePackageRequest {
            name,
            activity_type,
            description,
            price,
            duration_hours,
            max_participants,
            includes,
            image,
            gcash_number,
            gcash_name,
        } = value;
        PackagePatch {
            name,
            activity_type: activity_type.map(ActivityType::from),
            description,
            price,
            duration_hours,
            max_participants,
            includes,
            image,
            gcash_number,
            gcash_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub package_id: PackageId,
    pub name: String,
    pub activity_type: ActivityTypeName,
    pub description: String,
    pub price: Decimal,
    pub duration_hours: i32,
    pub max_participants: i32,
    pub includes: String,
    pub image: Option<String>,
    pub gcash_number: Option<String>,
    pub gcash_name: Option<String>,
    pub owner: PackageOwnerResponse,
    pub created_at: DateTime<Utc>,
}

impl From<Package> for PackageResponse {
    fn from(value: Package) -> Self {
        let Package {
            package_id,
            name,
            activity_type,
            description,
            price,
            duration_hours,
            max_participants,
            includes,
            image,
            gcash_number,
            gcash_name,
            owner,
            created_at,
        } = value;
        Self {
            package_id,
            name,
            activity_type: activity_type.into(),
            description,
            price,
            duration_hours,
            max_participants,
            includes,
            image,
            gcash_number,
            gcash_name,
            owner: owner.into(),
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageWithStatsResponse {
    #[serde(flatten)]
    pub package: PackageResponse,
    pub review_count: i64,
    pub average_rating: Decimal,
}

impl From<PackageWithStats> for PackageWithStatsResponse {
    fn from(value: PackageWithStats) -> Self {
        let PackageWithStats {
            package,
            review_count,
            average_rating,
        } = value;
        Self {
            package: package.into(),
            review_count,
            average_rating,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagesResponse {
    pub items: Vec<PackageWithStatsResponse>,
}

impl From<Vec<PackageWithStats>> for PackagesResponse {
    fn from(value: Vec<PackageWithStats>) -> Self {
        Self {
            items: value.into_iter().map(PackageWithStatsResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_type_names_round_trip() {
        for activity in [ActivityType::IslandHopping, ActivityType::Snorkeling] {
            assert_eq!(ActivityType::from(ActivityTypeName::from(activity)), activity);
        }
    }

    #[test]
    fn empty_update_request_becomes_empty_patch() {
        let req = UpdatePackageRequest {
            name: None,
            activity_type: None,
            description: None,
            price: None,
            duration_hours: None,
            max_participants: None,
            includes: None,
            image: None,
            gcash_number: None,
            gcash_name: None,
        };
        assert!(PackagePatch::from(req).is_empty());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let req = CreatePackageRequest {
            name: "Island Hopping Tour A".into(),
            activity_type: ActivityTypeName::IslandHopping,
            description: "Three beaches and a sandbar".into(),
            price: Decimal::new(150000, 2),
            duration_hours: 0,
            max_participants: 8,
            includes: "Boat, guide, lunch".into(),
            image: None,
            gcash_number: None,
            gcash_name: None,
        };
        assert!(req.validate(&()).is_err());
    }
}
