//! User service - Read access to registered accounts.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every account, oldest first
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService over the credential store.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use crate::infra::MockUserRepository;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_list_users_passes_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).returning(|| {
            Ok(vec![User {
                id: Uuid::new_v4(),
                email: "a@x.com".to_string(),
                password_hash: "$2b$04$hash".to_string(),
                name: "Ana".to_string(),
                role: UserRole::User,
                created_at: Utc::now(),
            }])
        });

        let service = UserManager::new(Arc::new(repo));
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ana");
    }
}
