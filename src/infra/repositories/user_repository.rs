//! Credential store: persisted user accounts keyed by unique email.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::AppResult;
use crate::infra::db::bounded;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Accounts are only ever created; there is no update or delete.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact (case-sensitive) email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a new account.
    ///
    /// Fails with `AppError::DuplicateKey` when the email is already taken,
    /// including when a concurrent insert won the race.
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// List all users, oldest first
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
    timeout: Duration,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let query = UserEntity::find().filter(user::Column::Email.eq(email));
        let result = bounded(self.timeout, query.one(&self.db)).await?;

        Ok(result.map(User::from))
    }

    async fn insert(&self, new_user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            name: Set(new_user.name),
            role: Set(new_user.role.to_string()),
            created_at: Set(Utc::now()),
        };

        let model = bounded(self.timeout, active_model.insert(&self.db)).await?;

        Ok(User::from(model))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let query = UserEntity::find().order_by_asc(user::Column::CreatedAt);
        let models = bounded(self.timeout, query.all(&self.db)).await?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
