use derive_new::new;
use rust_decimal::Decimal;

use crate::model::{
    id::{PackageId, UserId},
    package::ActivityType,
};

#[derive(new)]
pub struct CreatePackage {
    pub owned_by: UserId,
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
}

/// Explicit patch over the mutable package fields. Absent fields keep their
/// stored value; the update is one deterministic parameterized statement.
#[derive(Debug, Default)]
pub struct PackagePatch {
    pub name: Option<String>,
    pub activity_type: Option<ActivityType>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub duration_hours: Option<i32>,
    pub max_participants: Option<i32>,
    pub includes: Option<String>,
    pub image: Option<String>,
    pub gcash_number: Option<String>,
    pub gcash_name: Option<String>,
}

impl PackagePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.activity_type.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.duration_hours.is_none()
            && self.max_participants.is_none()
            && self.includes.is_none()
            && self.image.is_none()
            && self.gcash_number.is_none()
            && self.gcash_name.is_none()
    }
}

#[derive(new)]
pub struct UpdatePackage {
    pub package_id: PackageId,
    pub requested_user: UserId,
    pub patch: PackagePatch,
}

#[derive(new)]
pub struct DeletePackage {
    pub package_id: PackageId,
    pub requested_user: UserId,
}
