//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_BCRYPT_COST, DEFAULT_CORS_ORIGINS, DEFAULT_DATABASE_URL, DEFAULT_DB_MAX_CONNECTIONS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_STORE_TIMEOUT_SECONDS,
    DEFAULT_TOKEN_TTL_SECONDS, DEV_JWT_SECRET, MAX_BCRYPT_COST, MAX_TOKEN_TTL_SECONDS,
    MIN_BCRYPT_COST, MIN_JWT_SECRET_LENGTH,
};
use crate::domain::PasswordScheme;
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub store_timeout: Duration,
    jwt_secret: String,
    pub token_ttl_seconds: i64,
    pub password_scheme: PasswordScheme,
    pub server_host: String,
    pub server_port: u16,
    pub cors_origins: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("db_max_connections", &self.db_max_connections)
            .field("store_timeout", &self.store_timeout)
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .field("password_scheme", &self.password_scheme)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl Config {
    /// Build a configuration with defaults and the given signing secret.
    ///
    /// # Errors
    /// Returns a configuration error if the secret is shorter than
    /// [`MIN_JWT_SECRET_LENGTH`].
    pub fn with_jwt_secret(jwt_secret: impl Into<String>) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::config(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            store_timeout: Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECONDS),
            jwt_secret,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
            password_scheme: PasswordScheme::Bcrypt {
                cost: DEFAULT_BCRYPT_COST,
            },
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        })
    }

    /// Load configuration from the environment (and `.env`, if present).
    ///
    /// # Errors
    /// Fails if `JWT_SECRET` is missing in a release build, too short, or if
    /// any numeric or enumerated variable cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::config(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let mut config = Self::with_jwt_secret(jwt_secret)?;

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(max) = parse_var::<u32>("DB_MAX_CONNECTIONS")? {
            config.db_max_connections = max.max(1);
        }
        if let Some(secs) = parse_var::<u64>("STORE_TIMEOUT_SECONDS")? {
            config.store_timeout = Duration::from_secs(secs.max(1));
        }
        if let Ok(raw) = env::var("EXPIRES_IN") {
            config.token_ttl_seconds = parse_expires_in(&raw).ok_or_else(|| {
                AppError::config(format!("EXPIRES_IN has an invalid value: {:?}", raw))
            })?;
        }
        config.password_scheme = password_scheme_from_env()?;
        if let Ok(host) = env::var("SERVER_HOST") {
            config.server_host = host;
        }
        if let Some(port) = parse_var::<u16>("PORT")? {
            config.server_port = port;
        }
        if let Ok(origins) = env::var("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(config)
    }

    /// Get JWT secret bytes for token signing.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> AppResult<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::config(format!("{} has an invalid value: {:?}", name, raw))),
        Err(_) => Ok(None),
    }
}

fn password_scheme_from_env() -> AppResult<PasswordScheme> {
    let cost = parse_var::<u32>("BCRYPT_COST")?.unwrap_or(DEFAULT_BCRYPT_COST);
    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        return Err(AppError::config(format!(
            "BCRYPT_COST must be between {} and {}",
            MIN_BCRYPT_COST, MAX_BCRYPT_COST
        )));
    }

    match env::var("PASSWORD_HASHER").as_deref() {
        Err(_) | Ok("bcrypt") => Ok(PasswordScheme::Bcrypt { cost }),
        Ok("argon2") => Ok(PasswordScheme::Argon2),
        Ok(other) => Err(AppError::config(format!(
            "PASSWORD_HASHER must be \"bcrypt\" or \"argon2\", got {:?}",
            other
        ))),
    }
}

/// Parse a token lifetime such as `90`, `45s`, `30m`, `12h` or `7d` into seconds.
///
/// Zero, negative and anything past [`MAX_TOKEN_TTL_SECONDS`] yield `None`.
pub fn parse_expires_in(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (digits, unit) = match raw.char_indices().last()? {
        (idx, c) if c.is_ascii_alphabetic() => (&raw[..idx], c),
        _ => (raw, 's'),
    };

    let value: i64 = digits.trim().parse().ok()?;
    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3_600,
        'd' => 86_400,
        _ => return None,
    };

    value
        .checked_mul(multiplier)
        .filter(|secs| (1..=MAX_TOKEN_TTL_SECONDS).contains(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expires_in_units() {
        assert_eq!(parse_expires_in("90"), Some(90));
        assert_eq!(parse_expires_in("45s"), Some(45));
        assert_eq!(parse_expires_in("30m"), Some(1_800));
        assert_eq!(parse_expires_in("12h"), Some(43_200));
        assert_eq!(parse_expires_in("1d"), Some(86_400));
    }

    #[test]
    fn test_parse_expires_in_rejects_garbage() {
        assert_eq!(parse_expires_in(""), None);
        assert_eq!(parse_expires_in("d"), None);
        assert_eq!(parse_expires_in("10w"), None);
        assert_eq!(parse_expires_in("0h"), None);
        assert_eq!(parse_expires_in("-5m"), None);
    }

    #[test]
    fn test_parse_expires_in_caps_lifetime() {
        assert_eq!(parse_expires_in("3650d"), Some(MAX_TOKEN_TTL_SECONDS));
        assert_eq!(parse_expires_in("3651d"), None);
        assert_eq!(parse_expires_in("9000000000000000"), None);
        assert_eq!(parse_expires_in("99999999999999999999d"), None);
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::with_jwt_secret("too-short");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::with_jwt_secret("a-very-long-secret-value-for-tests-only").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("a-very-long-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_defaults_match_reference_cost() {
        let config = Config::with_jwt_secret("a-very-long-secret-value-for-tests-only").unwrap();
        assert_eq!(config.password_scheme, PasswordScheme::Bcrypt { cost: 10 });
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.token_ttl_seconds, 86_400);
    }
}
