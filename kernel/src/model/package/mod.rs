use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use strum::{AsRefStr, EnumString};

use crate::model::{id::PackageId, user::PackageOwner};

pub mod event;

/// The two activities offered in Puerto Galera. The column is a Postgres
/// enum, so anything else is rejected before it reaches the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, sqlx::Type, serde::Serialize)]
#[sqlx(type_name = "activity_type")]
pub enum ActivityType {
    #[strum(serialize = "Island Hopping")]
    #[sqlx(rename = "Island Hopping")]
    #[serde(rename = "Island Hopping")]
    IslandHopping,
    #[strum(serialize = "Snorkeling")]
    #[sqlx(rename = "Snorkeling")]
    Snorkeling,
}

#[derive(Debug)]
pub struct Package {
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
    pub owner: PackageOwner,
    pub created_at: DateTime<Utc>,
}

/// Public listing entry: the package plus its review aggregate.
#[derive(Debug)]
pub struct PackageWithStats {
    pub package: Package,
    pub review_count: i64,
    pub average_rating: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_type_parses_display_names() {
        assert_eq!(
            "Island Hopping".parse::<ActivityType>().unwrap(),
            ActivityType::IslandHopping
        );
        assert_eq!(
            "Snorkeling".parse::<ActivityType>().unwrap(),
            ActivityType::Snorkeling
        );
        assert!("Scuba Diving".parse::<ActivityType>().is_err());
    }
}
