//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod content;
pub mod password;
pub mod user;

pub use content::{
    Comment, ContactMessage, Document, Donation, NewComment, NewContactMessage, NewDonation,
    NewReliefGood, NewSubscription, NewSupply, NewTestimonial, NewVolunteer,
    NewsletterSubscription, ReliefGood, Supply, Testimonial, Volunteer,
};
pub use password::{Password, PasswordScheme};
pub use user::{NewUser, User, UserResponse, UserRole};
