//! Community service - Newsletter, contact messages, testimonials,
//! volunteers and comments.
//!
//! Newsletter subscriptions and volunteer registrations are one per email.
//! The existence check gives the friendly error; the unique index behind the
//! collection catches the concurrent case, which is reported the same way.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_ALREADY_SUBSCRIBED, MSG_ALREADY_VOLUNTEER};
use crate::domain::{
    Comment, ContactMessage, Document, NewComment, NewContactMessage, NewSubscription,
    NewTestimonial, NewVolunteer, NewsletterSubscription, Testimonial, Volunteer,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{Collection, DataStore};

/// Community service trait for dependency injection.
#[async_trait]
pub trait CommunityService: Send + Sync {
    async fn subscribe_newsletter(
        &self,
        draft: NewSubscription,
    ) -> AppResult<NewsletterSubscription>;

    async fn list_newsletter(&self) -> AppResult<Vec<NewsletterSubscription>>;

    async fn send_contact_message(&self, draft: NewContactMessage) -> AppResult<ContactMessage>;

    async fn list_contact_messages(&self) -> AppResult<Vec<ContactMessage>>;

    async fn add_testimonial(&self, draft: NewTestimonial) -> AppResult<Testimonial>;

    async fn list_testimonials(&self) -> AppResult<Vec<Testimonial>>;

    async fn register_volunteer(&self, draft: NewVolunteer) -> AppResult<Volunteer>;

    async fn list_volunteers(&self) -> AppResult<Vec<Volunteer>>;

    async fn post_comment(&self, draft: NewComment) -> AppResult<Comment>;

    async fn list_comments(&self) -> AppResult<Vec<Comment>>;
}

/// Insert into an email-keyed collection, reporting any duplicate as `message`.
async fn insert_unique<D: Document>(
    collection: Arc<dyn Collection<D>>,
    email: &str,
    draft: D::Draft,
    message: &str,
) -> AppResult<D> {
    if collection.find_by_email(email).await?.is_some() {
        return Err(AppError::already_exists(message));
    }

    match collection.insert(draft).await {
        Err(AppError::DuplicateKey) => Err(AppError::already_exists(message)),
        other => other,
    }
}

/// Concrete implementation of CommunityService over the data store.
pub struct CommunityBoard {
    store: Arc<dyn DataStore>,
}

impl CommunityBoard {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommunityService for CommunityBoard {
    async fn subscribe_newsletter(
        &self,
        draft: NewSubscription,
    ) -> AppResult<NewsletterSubscription> {
        let email = draft.email.clone();
        let subscription =
            insert_unique(self.store.newsletter(), &email, draft, MSG_ALREADY_SUBSCRIBED).await?;
        tracing::info!(subscription_id = %subscription.id, "Newsletter subscription added");
        Ok(subscription)
    }

    async fn list_newsletter(&self) -> AppResult<Vec<NewsletterSubscription>> {
        self.store.newsletter().list().await
    }

    async fn send_contact_message(&self, draft: NewContactMessage) -> AppResult<ContactMessage> {
        self.store.contact_messages().insert(draft).await
    }

    async fn list_contact_messages(&self) -> AppResult<Vec<ContactMessage>> {
        self.store.contact_messages().list().await
    }

    async fn add_testimonial(&self, draft: NewTestimonial) -> AppResult<Testimonial> {
        self.store.testimonials().insert(draft).await
    }

    async fn list_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        self.store.testimonials().list().await
    }

    async fn register_volunteer(&self, draft: NewVolunteer) -> AppResult<Volunteer> {
        let email = draft.email.clone();
        let volunteer =
            insert_unique(self.store.volunteers(), &email, draft, MSG_ALREADY_VOLUNTEER).await?;
        tracing::info!(volunteer_id = %volunteer.id, "Volunteer registered");
        Ok(volunteer)
    }

    async fn list_volunteers(&self) -> AppResult<Vec<Volunteer>> {
        self.store.volunteers().list().await
    }

    async fn post_comment(&self, draft: NewComment) -> AppResult<Comment> {
        self.store.comments().insert(draft).await
    }

    async fn list_comments(&self) -> AppResult<Vec<Comment>> {
        self.store.comments().list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MemoryStore;
    use uuid::Uuid;

    fn board() -> CommunityBoard {
        CommunityBoard::new(Arc::new(MemoryStore::new()))
    }

    fn volunteer(email: &str) -> NewVolunteer {
        NewVolunteer {
            name: "Ana".to_string(),
            email: email.to_string(),
            image: None,
            phone: "+8801700000000".to_string(),
            location: "Dhaka".to_string(),
            occupation: "Nurse".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_subscription() {
        let board = board();
        let draft = || NewSubscription {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
        };

        board.subscribe_newsletter(draft()).await.unwrap();
        let result = board.subscribe_newsletter(draft()).await;

        match result {
            Err(AppError::AlreadyExists(msg)) => assert_eq!(msg, MSG_ALREADY_SUBSCRIBED),
            other => panic!("expected AlreadyExists, got {:?}", other.map(|s| s.id)),
        }
        assert_eq!(board.list_newsletter().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_volunteer() {
        let board = board();

        board.register_volunteer(volunteer("a@x.com")).await.unwrap();
        board.register_volunteer(volunteer("b@x.com")).await.unwrap();
        let result = board.register_volunteer(volunteer("a@x.com")).await;

        assert!(
            matches!(result, Err(AppError::AlreadyExists(msg)) if msg == MSG_ALREADY_VOLUNTEER)
        );
        assert_eq!(board.list_volunteers().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_comments_allow_repeat_authors() {
        let board = board();
        for text in ["first", "second"] {
            board
                .post_comment(NewComment {
                    name: "Ana".to_string(),
                    email: "a@x.com".to_string(),
                    message: text.to_string(),
                })
                .await
                .unwrap();
        }

        let comments = board.list_comments().await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_ne!(comments[0].id, Uuid::nil());
        assert_eq!(comments[1].details.message, "second");
    }
}
