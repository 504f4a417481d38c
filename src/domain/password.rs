//! Password value object - Domain layer password handling.
//!
//! New hashes are produced with the configured [`PasswordScheme`]. Verification
//! reads the algorithm from the stored hash itself, so bcrypt hashes (`$2a$`,
//! `$2b$`, `$2y$`) and Argon2 PHC strings (`$argon2...`) can live side by side.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Hashing algorithm used for newly stored passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordScheme {
    /// bcrypt with the given work factor (log2 rounds)
    Bcrypt { cost: u32 },
    /// Argon2id with the crate defaults
    Argon2,
}

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// This is CPU-bound by design; async callers should run it on the
    /// blocking pool.
    ///
    /// # Errors
    /// Returns a validation error for an empty password and an internal
    /// error if the hasher fails.
    pub fn new(plain_text: &str, scheme: PasswordScheme) -> AppResult<Self> {
        if plain_text.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        let hash = match scheme {
            PasswordScheme::Bcrypt { cost } => bcrypt::hash(plain_text, cost)
                .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?,
            PasswordScheme::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(plain_text.as_bytes(), &salt)
                    .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?
                    .to_string()
            }
        };

        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// Unknown or corrupt hash formats never verify.
    pub fn verify(&self, plain_text: &str) -> bool {
        if self.hash.starts_with("$argon2") {
            PasswordHash::new(&self.hash)
                .map(|parsed| {
                    Argon2::default()
                        .verify_password(plain_text.as_bytes(), &parsed)
                        .is_ok()
                })
                .unwrap_or(false)
        } else if self.hash.starts_with("$2") {
            bcrypt::verify(plain_text, &self.hash).unwrap_or(false)
        } else {
            false
        }
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the suite fast
    const FAST_BCRYPT: PasswordScheme = PasswordScheme::Bcrypt { cost: 4 };

    #[test]
    fn test_bcrypt_hash_and_verify() {
        let password = Password::new("p@ss1", FAST_BCRYPT).unwrap();

        assert!(password.as_str().starts_with("$2"));
        assert!(password.verify("p@ss1"));
        assert!(!password.verify("wrong"));
    }

    #[test]
    fn test_argon2_hash_and_verify() {
        let password = Password::new("SecurePassword123!", PasswordScheme::Argon2).unwrap();

        assert!(password.as_str().starts_with("$argon2"));
        assert!(password.verify("SecurePassword123!"));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_password_from_hash() {
        let hash = Password::new("TestPassword123", FAST_BCRYPT)
            .unwrap()
            .into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify("TestPassword123"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain, FAST_BCRYPT).unwrap();
        let pass2 = Password::new(plain, FAST_BCRYPT).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert_ne!(pass1.as_str(), plain);
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_schemes_coexist() {
        let bcrypt = Password::new("shared", FAST_BCRYPT).unwrap();
        let argon = Password::new("shared", PasswordScheme::Argon2).unwrap();

        assert!(Password::from_hash(bcrypt.into_string()).verify("shared"));
        assert!(Password::from_hash(argon.into_string()).verify("shared"));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(matches!(
            Password::new("", FAST_BCRYPT),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!Password::from_hash("plaintext".into()).verify("plaintext"));
        assert!(!Password::from_hash("$argon2id$broken".into()).verify("x"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("secret", FAST_BCRYPT).unwrap();
        assert!(!format!("{:?}", password).contains(password.as_str()));
    }
}
