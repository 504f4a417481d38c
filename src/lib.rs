//! Relief API - Backend for a relief-goods donation platform
//!
//! Accounts with salted password hashes and signed login tokens, a relief
//! goods catalog, donations, supply posts, and community submissions
//! (newsletter, contact messages, testimonials, volunteers, comments).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Accounts, passwords and content documents
//! - **services**: Application use cases
//! - **infra**: Database, repositories and the data store hub
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response bodies
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (runs pending migrations first)
//! cargo run -- serve --port 5000
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, PasswordScheme, User, UserRole};
pub use errors::{AppError, AppResult};
pub use infra::{DataStore, Persistence};
