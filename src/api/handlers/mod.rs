//! HTTP request handlers.

pub mod auth_handler;
pub mod community_handler;
pub mod relief_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use community_handler::community_routes;
pub use relief_handler::relief_routes;
pub use user_handler::user_routes;
