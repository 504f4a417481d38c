//! Relief service - Catalog, donations and supply posts.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{MSG_RELIEF_GOOD_NOT_FOUND, MSG_SUPPLY_NOT_FOUND};
use crate::domain::{Donation, NewDonation, NewSupply, ReliefGood, Supply};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::DataStore;

/// Relief service trait for dependency injection.
#[async_trait]
pub trait ReliefService: Send + Sync {
    async fn list_relief_goods(&self) -> AppResult<Vec<ReliefGood>>;

    /// Fails with `NotFound` when no catalog entry has this id
    async fn get_relief_good(&self, id: Uuid) -> AppResult<ReliefGood>;

    async fn create_donation(&self, draft: NewDonation) -> AppResult<Donation>;

    async fn list_donations(&self) -> AppResult<Vec<Donation>>;

    async fn create_supply(&self, draft: NewSupply) -> AppResult<Supply>;

    async fn list_supplies(&self) -> AppResult<Vec<Supply>>;

    /// Replace every field of a supply post, creating it under `id` if absent
    async fn update_supply(&self, id: Uuid, draft: NewSupply) -> AppResult<Supply>;

    async fn delete_supply(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ReliefService over the data store.
pub struct ReliefDesk {
    store: Arc<dyn DataStore>,
}

impl ReliefDesk {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReliefService for ReliefDesk {
    async fn list_relief_goods(&self) -> AppResult<Vec<ReliefGood>> {
        self.store.relief_goods().list().await
    }

    async fn get_relief_good(&self, id: Uuid) -> AppResult<ReliefGood> {
        self.store
            .relief_goods()
            .get_by_id(id)
            .await?
            .ok_or_not_found(MSG_RELIEF_GOOD_NOT_FOUND)
    }

    async fn create_donation(&self, draft: NewDonation) -> AppResult<Donation> {
        let donation = self.store.donations().insert(draft).await?;
        tracing::info!(
            donation_id = %donation.id,
            amount = donation.details.amount,
            "Donation recorded"
        );
        Ok(donation)
    }

    async fn list_donations(&self) -> AppResult<Vec<Donation>> {
        self.store.donations().list().await
    }

    async fn create_supply(&self, draft: NewSupply) -> AppResult<Supply> {
        let supply = self.store.supplies().insert(draft).await?;
        tracing::info!(supply_id = %supply.id, "Supply post created");
        Ok(supply)
    }

    async fn list_supplies(&self) -> AppResult<Vec<Supply>> {
        self.store.supplies().list().await
    }

    async fn update_supply(&self, id: Uuid, draft: NewSupply) -> AppResult<Supply> {
        self.store.supplies().upsert(id, draft).await
    }

    async fn delete_supply(&self, id: Uuid) -> AppResult<()> {
        if !self.store.supplies().delete(id).await? {
            return Err(AppError::not_found(MSG_SUPPLY_NOT_FOUND));
        }
        tracing::info!(supply_id = %id, "Supply post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewReliefGood;
    use crate::infra::{Collection, MemoryStore};

    fn supply(title: &str) -> NewSupply {
        NewSupply {
            image_url: Some("https://img.example/rice.png".to_string()),
            category: "Food".to_string(),
            title: title.to_string(),
            amount: 20.0,
            description: "Bags of rice".to_string(),
        }
    }

    fn desk() -> (Arc<MemoryStore>, ReliefDesk) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), ReliefDesk::new(store))
    }

    #[tokio::test]
    async fn test_get_relief_good() {
        let (store, desk) = desk();
        let good = store
            .relief_goods
            .insert(NewReliefGood {
                title: "Blankets".to_string(),
                category: "Shelter".to_string(),
                image_url: None,
                amount: 100.0,
                description: "Wool blankets".to_string(),
            })
            .await
            .unwrap();

        let found = desk.get_relief_good(good.id).await.unwrap();
        assert_eq!(found.details.title, "Blankets");

        let missing = desk.get_relief_good(Uuid::new_v4()).await;
        match missing {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, MSG_RELIEF_GOOD_NOT_FOUND),
            other => panic!("expected NotFound, got {:?}", other.map(|g| g.id)),
        }
    }

    #[tokio::test]
    async fn test_update_supply_upserts() {
        let (_, desk) = desk();
        let id = Uuid::new_v4();

        let inserted = desk.update_supply(id, supply("Rice")).await.unwrap();
        assert_eq!(inserted.id, id);

        let replaced = desk.update_supply(id, supply("Lentils")).await.unwrap();
        assert_eq!(replaced.details.title, "Lentils");
        assert_eq!(replaced.created_at, inserted.created_at);

        let all = desk.list_supplies().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_supply() {
        let (_, desk) = desk();
        let created = desk.create_supply(supply("Rice")).await.unwrap();

        desk.delete_supply(created.id).await.unwrap();
        assert!(desk.list_supplies().await.unwrap().is_empty());

        let again = desk.delete_supply(created.id).await;
        assert!(matches!(again, Err(AppError::NotFound(msg)) if msg == MSG_SUPPLY_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_donations_listed_in_order() {
        let (_, desk) = desk();
        for name in ["Ana", "Ben"] {
            desk.create_donation(NewDonation {
                name: name.to_string(),
                email: format!("{}@x.com", name.to_lowercase()),
                amount: 50.0,
            })
            .await
            .unwrap();
        }

        let names: Vec<_> = desk
            .list_donations()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.details.name)
            .collect();
        assert_eq!(names, ["Ana", "Ben"]);
    }
}
