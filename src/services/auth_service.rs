//! Authentication service - Registration and login.
//!
//! Passwords are hashed and verified on the blocking thread pool. Login
//! failures are indistinguishable to the caller: an unknown email and a wrong
//! password yield the same error after a comparable amount of work.

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::OnceCell;
use utoipa::ToSchema;

use crate::config::{Config, MSG_USER_EXISTS};
use crate::domain::{NewUser, Password, PasswordScheme, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Hash checked when the email is unknown, so that path costs a real verify.
static DUMMY_PASSWORD: OnceCell<Password> = OnceCell::const_new();

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub name: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token issued after a successful login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed JWT
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Token lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account with role `user`
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Check credentials and issue a token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;
}

fn issue_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = TimeDelta::try_seconds(config.token_ttl_seconds)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| AppError::internal("Token expiry out of range"))?;

    let claims = Claims {
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        token,
        expires_in: config.token_ttl_seconds,
    })
}

async fn hash_password(password: String, scheme: PasswordScheme) -> AppResult<Password> {
    tokio::task::spawn_blocking(move || Password::new(&password, scheme))
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
}

async fn verify_password(stored: Password, password: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || stored.verify(&password))
        .await
        .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))
}

async fn dummy_password(scheme: PasswordScheme) -> AppResult<Password> {
    DUMMY_PASSWORD
        .get_or_try_init(|| hash_password("not-a-real-password".to_string(), scheme))
        .await
        .cloned()
}

/// Concrete implementation of AuthService over the credential store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Field presence and email format are checked by the handler's ValidatedJson
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::already_exists(MSG_USER_EXISTS));
        }

        let password_hash = hash_password(password, self.config.password_scheme)
            .await?
            .into_string();

        let new_user = NewUser {
            email,
            name,
            password_hash,
            role: UserRole::User,
        };

        // The unique index decides races that slipped past the lookup above
        let user = match self.users.insert(new_user).await {
            Err(AppError::DuplicateKey) => return Err(AppError::already_exists(MSG_USER_EXISTS)),
            other => other?,
        };

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let Some(user) = self.users.find_by_email(&email).await? else {
            let dummy = dummy_password(self.config.password_scheme).await?;
            verify_password(dummy, password).await?;
            return Err(AppError::InvalidCredentials);
        };

        let stored = Password::from_hash(user.password_hash.clone());
        if !verify_password(stored, password).await? {
            return Err(AppError::InvalidCredentials);
        }

        tracing::debug!(user_id = %user.id, "Token issued");
        issue_token(&user, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use uuid::Uuid;

    const SECRET: &str = "unit-test-secret-at-least-32-chars-long";

    fn test_config() -> Config {
        let mut config = Config::with_jwt_secret(SECRET).unwrap();
        config.password_scheme = PasswordScheme::Bcrypt { cost: 4 };
        config
    }

    fn stored_user(password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: Password::new(password, PasswordScheme::Bcrypt { cost: 4 })
                .unwrap()
                .into_string(),
            name: "Ana".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|u| {
                u.password_hash != "p@ss1"
                    && u.password_hash.starts_with("$2")
                    && u.role == UserRole::User
            })
            .returning(|u| {
                Ok(User {
                    id: Uuid::new_v4(),
                    email: u.email,
                    password_hash: u.password_hash,
                    name: u.name,
                    role: u.role,
                    created_at: Utc::now(),
                })
            });

        let auth = Authenticator::new(Arc::new(repo), test_config());
        let user = auth
            .register("Ana".into(), "a@x.com".into(), "p@ss1".into())
            .await
            .unwrap();

        assert_eq!(user.email, "a@x.com");
        assert!(Password::from_hash(user.password_hash).verify("p@ss1"));
    }

    #[tokio::test]
    async fn test_register_existing_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("p@ss1"))));
        repo.expect_insert().never();

        let auth = Authenticator::new(Arc::new(repo), test_config());
        let result = auth
            .register("Ana".into(), "a@x.com".into(), "p@ss1".into())
            .await;

        match result {
            Err(AppError::AlreadyExists(msg)) => assert_eq!(msg, "User already exists"),
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_race_maps_to_already_exists() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_insert().returning(|_| Err(AppError::DuplicateKey));

        let auth = Authenticator::new(Arc::new(repo), test_config());
        let result = auth
            .register("Ana".into(), "a@x.com".into(), "p@ss1".into())
            .await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_store_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(AppError::StoreUnavailable("timed out".into())));

        let auth = Authenticator::new(Arc::new(repo), test_config());
        let result = auth
            .register("Ana".into(), "a@x.com".into(), "p@ss1".into())
            .await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_login_issues_token_with_claims() {
        let user = stored_user("p@ss1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let config = test_config();
        let auth = Authenticator::new(Arc::new(repo), config.clone());
        let issued = auth.login("a@x.com".into(), "p@ss1".into()).await.unwrap();

        let claims = decode::<Claims>(
            &issued.token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::default(),
        )
        .unwrap()
        .claims;

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.name, "Ana");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.exp - claims.iat, config.token_ttl_seconds);
        assert_eq!(issued.expires_in, config.token_ttl_seconds);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let user = stored_user("p@ss1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let auth = Authenticator::new(Arc::new(repo), test_config());
        let result = auth.login("a@x.com".into(), "wrong".into()).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let auth = Authenticator::new(Arc::new(repo), test_config());
        let result = auth.login("nobody@x.com".into(), "p@ss1".into()).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_expiry_out_of_range_is_an_error() {
        let user = stored_user("p@ss1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut config = test_config();
        config.token_ttl_seconds = 9_000_000_000_000_000;
        let auth = Authenticator::new(Arc::new(repo), config);
        let result = auth.login("a@x.com".into(), "p@ss1".into()).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
