use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use kernel::model::{
    id::{PackageId, UserId},
    package::{ActivityType, Package, PackageWithStats},
    user::PackageOwner,
};

#[derive(FromRow)]
pub struct PackageRow {
    pub package_id: PackageId,
    pub name: String,
    pub activity_type: ActivityType,
    pub description: String,
    pub price: Decimal,
    pub duration_hours: i32,
    pub max_participants: i32,
    pub includes: String,
    pub image: Option<String>,
    pub gcash_number: Option<String>,
    pub gcash_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub owner_id: UserId,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_contact_number: String,
    pub owner_email: String,
}

impl From<PackageRow> for Package {
    fn from(value: PackageRow) -> Self {
        let PackageRow {
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
            created_at,
            owner_id,
            owner_first_name,
            owner_last_name,
            owner_contact_number,
            owner_email,
        } = value;
        Package {
            package_id,
            name,
            activity_type,
            description,
            price,
            duration_hours,
            max_participants,
            includes,
            image: image.clone(),
            gcash_number: gcash_number.clone(),
            gcash_name: gcash_name.clone(),
            owner: PackageOwner {
                owner_id,
                owner_name: format!("{owner_first_name} {owner_last_name}"),
                contact_number: owner_contact_number,
                email: owner_email,
                gcash_number,
                gcash_name,
            },
            created_at,
        }
    }
}

/// Listing row: package columns plus the review aggregate from the
/// grouped LEFT JOIN.
#[derive(FromRow)]
pub struct PackageWithStatsRow {
    #[sqlx(flatten)]
    pub package: PackageRow,
    pub review_count: i64,
    pub average_rating: Decimal,
}

impl From<PackageWithStatsRow> for PackageWithStats {
    fn from(value: PackageWithStatsRow) -> Self {
        PackageWithStats {
            package: value.package.into(),
            review_count: value.review_count,
            average_rating: value.average_rating,
        }
    }
}
