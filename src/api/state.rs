//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and the data
//! store they share.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::DataStore;
use crate::services::{
    AuthService, CommunityService, ReliefService, ServiceContainer, Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User listing
    pub user_service: Arc<dyn UserService>,
    /// Catalog, donations and supplies
    pub relief_service: Arc<dyn ReliefService>,
    /// Newsletter, contact, testimonials, volunteers, comments
    pub community_service: Arc<dyn CommunityService>,
    /// Shared store, used directly only by the health check
    pub store: Arc<dyn DataStore>,
}

impl AppState {
    /// Build every service over `store`.
    ///
    /// This is the recommended way to create AppState; the same call wires
    /// the production Postgres store and the in-memory test store.
    pub fn from_store(store: Arc<dyn DataStore>, config: Config) -> Self {
        let container = Services::from_store(store.clone(), config);
        Self::new(&container, store)
    }

    /// Create application state from an existing service container.
    pub fn new(container: &dyn ServiceContainer, store: Arc<dyn DataStore>) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            relief_service: container.relief(),
            community_service: container.community(),
            store,
        }
    }
}
