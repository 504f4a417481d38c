//! Content documents: catalog items, donations, supply posts and the
//! community submissions (newsletter, contact, testimonials, volunteers,
//! comments).
//!
//! Each stored document pairs a store-assigned `id` and `created_at` with the
//! client-supplied fields of its `New*` draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A document kept in a generic collection.
pub trait Document: Clone + Send + Sync + 'static {
    /// Client-supplied fields for inserts and full replacements
    type Draft: Send + Sync + 'static;

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    /// Email the document is keyed by, for collections with one-per-email rules
    fn email(&self) -> Option<&str> {
        None
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;
}

macro_rules! document {
    ($doc:ident, $draft:ident) => {
        document!(@impl $doc, $draft, |_doc| None);
    };
    ($doc:ident, $draft:ident, keyed_by_email) => {
        document!(@impl $doc, $draft, |doc| Some(doc.details.email.as_str()));
    };
    (@impl $doc:ident, $draft:ident, |$this:ident| $email:expr) => {
        #[derive(Debug, Clone, Serialize, ToSchema)]
        #[serde(rename_all = "camelCase")]
        pub struct $doc {
            pub id: Uuid,
            #[serde(flatten)]
            pub details: $draft,
            pub created_at: DateTime<Utc>,
        }

        impl Document for $doc {
            type Draft = $draft;

            fn id(&self) -> Uuid {
                self.id
            }

            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }

            fn email(&self) -> Option<&str> {
                let $this = self;
                $email
            }

            fn build(id: Uuid, created_at: DateTime<Utc>, details: $draft) -> Self {
                Self {
                    id,
                    details,
                    created_at,
                }
            }
        }
    };
}

// =============================================================================
// Relief side
// =============================================================================

/// Relief-goods catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewReliefGood {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Winter blankets")]
    pub title: String,
    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Shelter")]
    pub category: String,
    pub image_url: Option<String>,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    #[schema(example = 250.0)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

/// Donation pledge
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ana")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    #[schema(example = 50.0)]
    pub amount: f64,
}

/// Supply post
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSupply {
    pub image_url: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "Food")]
    pub category: String,
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Rice bags")]
    pub title: String,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    #[schema(example = 120.0)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

document!(ReliefGood, NewReliefGood);
document!(Donation, NewDonation);
document!(Supply, NewSupply);

// =============================================================================
// Community side
// =============================================================================

/// Newsletter signup
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ana")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// Contact-us message
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Testimonial
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub image: Option<String>,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[validate(length(min = 1, message = "Review is required"))]
    pub review: String,
}

/// Volunteer registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteer {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub image: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub occupation: String,
}

/// Comment
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

document!(NewsletterSubscription, NewSubscription, keyed_by_email);
document!(ContactMessage, NewContactMessage);
document!(Testimonial, NewTestimonial);
document!(Volunteer, NewVolunteer, keyed_by_email);
document!(Comment, NewComment);
