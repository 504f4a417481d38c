//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories (credential store, document collections)
//! - The data store hub injected into services
//! - An in-memory store double (`test-utils`)

pub mod db;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod repositories;
pub mod store;

pub use db::{Database, Migrator};
pub use repositories::{Collection, DocumentEntity, SeaCollection, UserRepository, UserStore};
pub use store::{DataStore, Persistence};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
