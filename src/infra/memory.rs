//! In-memory [`DataStore`] for tests.
//!
//! Mirrors the relational store's observable behavior: ids and timestamps are
//! assigned on insert, lists come back oldest first, and email-keyed
//! collections reject a second document for the same email with
//! [`AppError::DuplicateKey`], just as the unique indexes do.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::repositories::{Collection, UserRepository};
use super::store::DataStore;
use crate::domain::{
    Comment, ContactMessage, Document, Donation, NewUser, NewsletterSubscription, ReliefGood,
    Supply, Testimonial, User, Volunteer,
};
use crate::errors::{AppError, AppResult};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking test thread must not wedge the rest of the suite
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Vec-backed collection; insertion order doubles as creation order.
pub struct MemoryCollection<D> {
    docs: Mutex<Vec<D>>,
}

impl<D> Default for MemoryCollection<D> {
    fn default() -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
        }
    }
}

impl<D: Document> MemoryCollection<D> {
    fn email_taken(docs: &[D], candidate: &D) -> bool {
        match candidate.email() {
            Some(email) => docs
                .iter()
                .any(|d| d.id() != candidate.id() && d.email() == Some(email)),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.docs).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<D: Document> Collection<D> for MemoryCollection<D> {
    async fn list(&self) -> AppResult<Vec<D>> {
        Ok(lock(&self.docs).clone())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<D>> {
        Ok(lock(&self.docs).iter().find(|d| d.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<D>> {
        Ok(lock(&self.docs)
            .iter()
            .find(|d| d.email() == Some(email))
            .cloned())
    }

    async fn insert(&self, draft: D::Draft) -> AppResult<D> {
        let doc = D::build(Uuid::new_v4(), Utc::now(), draft);
        let mut docs = lock(&self.docs);
        if Self::email_taken(&docs, &doc) {
            return Err(AppError::DuplicateKey);
        }
        docs.push(doc.clone());
        Ok(doc)
    }

    async fn upsert(&self, id: Uuid, draft: D::Draft) -> AppResult<D> {
        let mut docs = lock(&self.docs);
        let position = docs.iter().position(|d| d.id() == id);
        let created_at = position.map_or_else(Utc::now, |i| docs[i].created_at());
        let doc = D::build(id, created_at, draft);

        if Self::email_taken(&docs, &doc) {
            return Err(AppError::DuplicateKey);
        }
        match position {
            Some(i) => docs[i] = doc.clone(),
            None => docs.push(doc.clone()),
        }
        Ok(doc)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut docs = lock(&self.docs);
        let before = docs.len();
        docs.retain(|d| d.id() != id);
        Ok(docs.len() < before)
    }
}

/// Credential store kept in a Vec, unique on email.
#[derive(Default)]
pub struct MemoryUsers {
    users: Mutex<Vec<User>>,
}

impl MemoryUsers {
    pub fn snapshot(&self) -> Vec<User> {
        lock(&self.users).clone()
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(lock(&self.users).iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> AppResult<User> {
        let mut users = lock(&self.users);
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::DuplicateKey);
        }

        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            name: new_user.name,
            role: new_user.role,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(lock(&self.users).clone())
    }
}

/// Process-local [`DataStore`] with public handles to every collection.
#[derive(Default)]
pub struct MemoryStore {
    pub users: Arc<MemoryUsers>,
    pub relief_goods: Arc<MemoryCollection<ReliefGood>>,
    pub donations: Arc<MemoryCollection<Donation>>,
    pub supplies: Arc<MemoryCollection<Supply>>,
    pub newsletter: Arc<MemoryCollection<NewsletterSubscription>>,
    pub contact_messages: Arc<MemoryCollection<ContactMessage>>,
    pub testimonials: Arc<MemoryCollection<Testimonial>>,
    pub volunteers: Arc<MemoryCollection<Volunteer>>,
    pub comments: Arc<MemoryCollection<Comment>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `ping` fail as if the database were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl DataStore for MemoryStore {
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
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("memory store offline".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewComment, NewSubscription, UserRole};

    fn subscription(email: &str) -> NewSubscription {
        NewSubscription {
            name: "Ana".to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_keyed_collection_rejects_second_email() {
        let newsletter = MemoryCollection::<NewsletterSubscription>::default();

        newsletter.insert(subscription("a@x.io")).await.unwrap();
        let result = newsletter.insert(subscription("a@x.io")).await;

        assert!(matches!(result, Err(AppError::DuplicateKey)));
        assert_eq!(newsletter.len(), 1);
    }

    #[tokio::test]
    async fn test_unkeyed_collection_allows_repeats() {
        let comments = MemoryCollection::<Comment>::default();
        let draft = || NewComment {
            name: "Ana".to_string(),
            email: "a@x.io".to_string(),
            message: "hi".to_string(),
        };

        comments.insert(draft()).await.unwrap();
        comments.insert(draft()).await.unwrap();

        assert_eq!(comments.len(), 2);
    }

    #[tokio::test]
    async fn test_upsert_keeps_created_at() {
        let newsletter = MemoryCollection::<NewsletterSubscription>::default();
        let first = newsletter.insert(subscription("a@x.io")).await.unwrap();

        let replaced = newsletter
            .upsert(first.id, subscription("b@x.io"))
            .await
            .unwrap();

        assert_eq!(replaced.created_at, first.created_at);
        assert_eq!(replaced.details.email, "b@x.io");
        assert_eq!(newsletter.len(), 1);
    }

    #[tokio::test]
    async fn test_users_unique_on_email() {
        let users = MemoryUsers::default();
        let new_user = || NewUser {
            email: "ana@x.io".to_string(),
            name: "Ana".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        };

        users.insert(new_user()).await.unwrap();
        let result = users.insert(new_user()).await;

        assert!(matches!(result, Err(AppError::DuplicateKey)));
        assert_eq!(users.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_offline_ping() {
        let store = MemoryStore::new();
        assert!(store.ping().await.is_ok());

        store.set_offline(true);
        assert!(matches!(store.ping().await, Err(AppError::StoreUnavailable(_))));
    }
}
