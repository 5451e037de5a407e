use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        booking::BookingRepositoryImpl, health::HealthCheckRepositoryImpl,
        package::PackageRepositoryImpl, review::ReviewRepositoryImpl,
        stats::StatsRepositoryImpl, tourist::TouristRepositoryImpl, user::UserRepositoryImpl,
    },
};
use kernel::repository::{
    booking::BookingRepository, health::HealthCheckRepository, package::PackageRepository,
    review::ReviewRepository, stats::StatsRepository, tourist::TouristRepository,
    user::UserRepository,
};

/// The dependency-injection container every handler pulls its
/// repositories from.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    tourist_repository: Arc<dyn TouristRepository>,
    package_repository: Arc<dyn PackageRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    review_repository: Arc<dyn ReviewRepository>,
    stats_repository: Arc<dyn StatsRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let tourist_repository = Arc::new(TouristRepositoryImpl::new(pool.clone()));
        let package_repository = Arc::new(PackageRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryImpl::new(pool.clone()));
        let stats_repository = Arc::new(StatsRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            user_repository,
            tourist_repository,
            package_repository,
            booking_repository,
            review_repository,
            stats_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn tourist_repository(&self) -> Arc<dyn TouristRepository> {
        self.tourist_repository.clone()
    }

    pub fn package_repository(&self) -> Arc<dyn PackageRepository> {
        self.package_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn review_repository(&self) -> Arc<dyn ReviewRepository> {
        self.review_repository.clone()
    }

    pub fn stats_repository(&self) -> Arc<dyn StatsRepository> {
        self.stats_repository.clone()
    }
}
