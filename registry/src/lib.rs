use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, health::HealthCheckRepositoryImpl, proposal::ProposalRepositoryImpl,
    rental::RentalRepositoryImpl, space::SpaceRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::booking::BookingCoordinator;
use kernel::clock::{Clock, SystemClock};
use kernel::repository::{
    auth::AuthRepository, health::HealthCheckRepository, proposal::ProposalRepository,
    rental::RentalRepository, space::SpaceRepository, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    space_repository: Arc<dyn SpaceRepository>,
    rental_repository: Arc<dyn RentalRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    booking_coordinator: Arc<BookingCoordinator>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let space_repository: Arc<dyn SpaceRepository> =
            Arc::new(SpaceRepositoryImpl::new(pool.clone()));
        let rental_repository: Arc<dyn RentalRepository> =
            Arc::new(RentalRepositoryImpl::new(pool.clone()));
        let proposal_repository: Arc<dyn ProposalRepository> = Arc::new(
            ProposalRepositoryImpl::new(redis_client.clone(), app_config.proposal.redeemed_ttl),
        );
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let booking_coordinator = Arc::new(BookingCoordinator::new(
            space_repository.clone(),
            rental_repository.clone(),
            proposal_repository,
            clock,
            app_config.proposal.ttl,
        ));
        Self {
            health_check_repository,
            space_repository,
            rental_repository,
            user_repository,
            auth_repository,
            booking_coordinator,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        self.space_repository.clone()
    }

    pub fn rental_repository(&self) -> Arc<dyn RentalRepository> {
        self.rental_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn booking_coordinator(&self) -> Arc<BookingCoordinator> {
        self.booking_coordinator.clone()
    }
}
