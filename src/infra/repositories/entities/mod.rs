//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod comment;
pub mod contact_message;
pub mod donation;
pub mod newsletter_subscription;
pub mod relief_good;
pub mod supply;
pub mod testimonial;
pub mod user;
pub mod volunteer;
