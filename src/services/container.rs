//! Service Container - Centralized service access.
//!
//! Every service is built over one injected [`DataStore`], so swapping the
//! store swaps the whole backend.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CommunityBoard, CommunityService, ReliefDesk, ReliefService,
    UserManager, UserService,
};
use crate::config::Config;
use crate::infra::DataStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn relief(&self) -> Arc<dyn ReliefService>;

    fn community(&self) -> Arc<dyn CommunityService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    relief_service: Arc<dyn ReliefService>,
    community_service: Arc<dyn CommunityService>,
}

impl Services {
    /// Create service container from a data store and config
    pub fn from_store(store: Arc<dyn DataStore>, config: Config) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(store.users(), config)),
            user_service: Arc::new(UserManager::new(store.users())),
            relief_service: Arc::new(ReliefDesk::new(store.clone())),
            community_service: Arc::new(CommunityBoard::new(store)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn relief(&self) -> Arc<dyn ReliefService> {
        self.relief_service.clone()
    }

    fn community(&self) -> Arc<dyn CommunityService> {
        self.community_service.clone()
    }
}
