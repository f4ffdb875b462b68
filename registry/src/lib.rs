use std::sync::Arc;

use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::event::EventRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::storage::PhotoStorageImpl;
use adapter::{database::ConnectionPool, repository::health::HealthCheckRepositoryImpl};
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::redis::RedisClient;
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::event::EventRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::photo::PhotoStorage;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    event_repository: Arc<dyn EventRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    photo_storage: Arc<dyn PhotoStorage>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let event_repository = Arc::new(EventRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let photo_storage = Arc::new(PhotoStorageImpl::new(
            app_config.storage.upload_dir.clone(),
        ));
        Self {
            health_check_repository,
            user_repository,
            event_repository,
            booking_repository,
            auth_repository,
            photo_storage,
        }
    }

    // テストで実装を差し替えられるようにする組み立て口
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        user_repository: Arc<dyn UserRepository>,
        event_repository: Arc<dyn EventRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        photo_storage: Arc<dyn PhotoStorage>,
    ) -> Self {
        Self {
            health_check_repository,
            user_repository,
            event_repository,
            booking_repository,
            auth_repository,
            photo_storage,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn photo_storage(&self) -> Arc<dyn PhotoStorage> {
        self.photo_storage.clone()
    }
}
