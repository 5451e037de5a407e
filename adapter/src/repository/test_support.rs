//! Seed helpers shared by the repository test suites.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use kernel::model::{
    booking::{event::CreateBooking, PaymentMethod},
    id::{PackageId, TouristId, UserId},
    package::{event::CreatePackage, ActivityType},
    role::Role,
    tourist::event::RegisterTourist,
    user::event::CreateUser,
};
use kernel::repository::{
    package::PackageRepository, tourist::TouristRepository, user::UserRepository,
};
use shared::error::AppResult;

use crate::database::ConnectionPool;
use crate::repository::{
    package::PackageRepositoryImpl, tourist::TouristRepositoryImpl, user::UserRepositoryImpl,
};

pub(crate) async fn seed_user(db: &ConnectionPool, name: &str, role: Role) -> AppResult<UserId> {
    let user = UserRepositoryImpl::new(db.clone())
        .create(CreateUser::new(
            name.to_string(),
            name.to_string(),
            "Reyes".into(),
            format!("{name}@example.com"),
            "password123".into(),
            "09171234567".into(),
            role,
        ))
        .await?;
    Ok(user.user_id)
}

pub(crate) async fn seed_tourist(db: &ConnectionPool, user_id: UserId) -> AppResult<TouristId> {
    TouristRepositoryImpl::new(db.clone())
        .create(RegisterTourist::new(
            user_id,
            "Maria".into(),
            "Reyes".into(),
            "maria@example.com".into(),
            "09171234567".into(),
            28,
            "female".into(),
            "Filipino".into(),
            "Manila".into(),
            1,
            0,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            "Coco Beach Resort".into(),
        ))
        .await
}

/// One package priced at 1500.00 with the given capacity.
pub(crate) async fn seed_package(
    db: &ConnectionPool,
    owned_by: UserId,
    max_participants: i32,
) -> AppResult<PackageId> {
    PackageRepositoryImpl::new(db.clone())
        .create(CreatePackage::new(
            owned_by,
            "Island Hopping Tour A".into(),
            ActivityType::IslandHopping,
            "Three beaches and a sandbar".into(),
            Decimal::new(150000, 2),
            4,
            max_participants,
            "Boat, guide, lunch".into(),
            None,
            None,
            None,
        ))
        .await
}

pub(crate) fn booking_event(
    user_id: UserId,
    package_id: PackageId,
    participants: i32,
) -> CreateBooking {
    CreateBooking::new(
        user_id,
        package_id,
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        participants,
        "09171234567".into(),
        None,
        None,
        None,
        PaymentMethod::Cash,
    )
}
