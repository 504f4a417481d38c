//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, community_handler, relief_handler, user_handler};
use crate::domain::{
    Comment, ContactMessage, Donation, NewComment, NewContactMessage, NewDonation, NewReliefGood,
    NewSubscription, NewSupply, NewTestimonial, NewVolunteer, NewsletterSubscription, ReliefGood,
    Supply, Testimonial, UserResponse, UserRole, Volunteer,
};
use crate::types::{ErrorBody, MessageResponse};

/// OpenAPI documentation for the Relief API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Relief API",
        version = "0.1.0",
        description = "Backend for a relief-goods donation platform: accounts, catalog, donations, supply posts and community submissions",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // Authentication
        auth_handler::register,
        auth_handler::login,
        // Users
        user_handler::list_users,
        // Relief
        relief_handler::list_relief_goods,
        relief_handler::get_relief_good,
        relief_handler::create_donation,
        relief_handler::list_donations,
        relief_handler::create_supply,
        relief_handler::list_supplies,
        relief_handler::update_supply,
        relief_handler::delete_supply,
        // Community
        community_handler::subscribe_newsletter,
        community_handler::list_newsletter,
        community_handler::send_contact_message,
        community_handler::list_contact_messages,
        community_handler::add_testimonial,
        community_handler::list_testimonials,
        community_handler::register_volunteer,
        community_handler::list_volunteers,
        community_handler::post_comment,
        community_handler::list_comments,
    ),
    components(
        schemas(
            // Shared bodies
            MessageResponse,
            ErrorBody,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            UserRole,
            UserResponse,
            // Relief documents
            NewReliefGood,
            ReliefGood,
            NewDonation,
            Donation,
            NewSupply,
            Supply,
            // Community documents
            NewSubscription,
            NewsletterSubscription,
            NewContactMessage,
            ContactMessage,
            NewTestimonial,
            Testimonial,
            NewVolunteer,
            Volunteer,
            NewComment,
            Comment,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "Registered accounts"),
        (name = "Relief", description = "Relief goods catalog, donations and supply posts"),
        (name = "Community", description = "Newsletter, contact, testimonials, volunteers and comments")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/register",
            "/api/v1/login",
            "/api/v1/users",
            "/api/v1/all-relief-goods/{id}",
            "/api/v1/supply/{id}",
            "/api/v1/newsletter",
            "/api/v1/contact-us",
            "/api/v1/comment",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
