//! Data store hub.
//!
//! A single injected handle that owns the connection pool and hands out the
//! credential store and every content collection. Services depend on the
//! [`DataStore`] trait, never on a global connection, so tests can swap in
//! an in-memory implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::db;
use super::repositories::entities::{
    comment, contact_message, donation, newsletter_subscription, relief_good, supply, testimonial,
    volunteer,
};
use super::repositories::{Collection, SeaCollection, UserRepository, UserStore};
use crate::domain::{
    Comment, ContactMessage, Donation, NewsletterSubscription, ReliefGood, Supply, Testimonial,
    Volunteer,
};
use crate::errors::AppResult;

/// Access to every repository backed by the shared store.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Credential store
    fn users(&self) -> Arc<dyn UserRepository>;

    fn relief_goods(&self) -> Arc<dyn Collection<ReliefGood>>;

    fn donations(&self) -> Arc<dyn Collection<Donation>>;

    fn supplies(&self) -> Arc<dyn Collection<Supply>>;

    fn newsletter(&self) -> Arc<dyn Collection<NewsletterSubscription>>;

    fn contact_messages(&self) -> Arc<dyn Collection<ContactMessage>>;

    fn testimonials(&self) -> Arc<dyn Collection<Testimonial>>;

    fn volunteers(&self) -> Arc<dyn Collection<Volunteer>>;

    fn comments(&self) -> Arc<dyn Collection<Comment>>;

    /// Check connectivity
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed DataStore
pub struct Persistence {
    db: DatabaseConnection,
    timeout: Duration,
    users: Arc<UserStore>,
    relief_goods: Arc<SeaCollection<relief_good::Entity>>,
    donations: Arc<SeaCollection<donation::Entity>>,
    supplies: Arc<SeaCollection<supply::Entity>>,
    newsletter: Arc<SeaCollection<newsletter_subscription::Entity>>,
    contact_messages: Arc<SeaCollection<contact_message::Entity>>,
    testimonials: Arc<SeaCollection<testimonial::Entity>>,
    volunteers: Arc<SeaCollection<volunteer::Entity>>,
    comments: Arc<SeaCollection<comment::Entity>>,
}

impl Persistence {
    /// Wire every repository to the shared pool; `timeout` bounds each query.
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone(), timeout)),
            relief_goods: Arc::new(SeaCollection::new(db.clone(), timeout)),
            donations: Arc::new(SeaCollection::new(db.clone(), timeout)),
            supplies: Arc::new(SeaCollection::new(db.clone(), timeout)),
            newsletter: Arc::new(SeaCollection::new(db.clone(), timeout)),
            contact_messages: Arc::new(SeaCollection::new(db.clone(), timeout)),
            testimonials: Arc::new(SeaCollection::new(db.clone(), timeout)),
            volunteers: Arc::new(SeaCollection::new(db.clone(), timeout)),
            comments: Arc::new(SeaCollection::new(db.clone(), timeout)),
            db,
            timeout,
        }
    }
}

#[async_trait]
impl DataStore for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn relief_goods(&self) -> Arc<dyn Collection<ReliefGood>> {
        self.relief_goods.clone()
    }

    fn donations(&self) -> Arc<dyn Collection<Donation>> {
        self.donations.clone()
    }

    fn supplies(&self) -> Arc<dyn Collection<Supply>> {
        self.supplies.clone()
    }

    fn newsletter(&self) -> Arc<dyn Collection<NewsletterSubscription>> {
        self.newsletter.clone()
    }

    fn contact_messages(&self) -> Arc<dyn Collection<ContactMessage>> {
        self.contact_messages.clone()
    }

    fn testimonials(&self) -> Arc<dyn Collection<Testimonial>> {
        self.testimonials.clone()
    }

    fn volunteers(&self) -> Arc<dyn Collection<Volunteer>> {
        self.volunteers.clone()
    }

    fn comments(&self) -> Arc<dyn Collection<Comment>> {
        self.comments.clone()
    }

    async fn ping(&self) -> AppResult<()> {
        db::bounded(self.timeout, db::ping(&self.db)).await
    }
}
