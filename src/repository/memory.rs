use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{ListingStore, NewListing, StoreError, StoreResult, StoredListing};

/// In-memory [`ListingStore`] using the same ObjectId-hex identifier scheme
/// as the MongoDB store. Backs tests and local development; nothing survives
/// a restart.
#[derive(Debug, Default)]
pub struct MemoryListingStore {
    listings: RwLock<Vec<StoredListing>>,
}

impl MemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListingStore for MemoryListingStore {
    async fn create(&self, new: NewListing) -> StoreResult<StoredListing> {
        let stored = StoredListing {
            id: ObjectId::new().to_hex(),
            owner_address: new.owner_address,
            item_name: new.item_name,
            item_description: new.item_description,
            rental_fee: new.rental_fee,
            deposit_amount: new.deposit_amount,
            uploaded_images: new.uploaded_images,
            created_at: Utc::now(),
        };

        self.listings.write().await.push(stored.clone());

        Ok(stored)
    }

    async fn list_all(&self) -> StoreResult<Vec<StoredListing>> {
        Ok(self.listings.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<StoredListing> {
        // Same identifier rules as the MongoDB store: malformed ids are a
        // lookup miss, not a caller fault.
        if ObjectId::parse_str(id).is_err() {
            return Err(StoreError::NotFound);
        }

        self.listings
            .read()
            .await
            .iter()
            .find(|listing| listing.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn sample_listing(name: &str) -> NewListing {
        NewListing {
            owner_address: "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string(),
            item_name: name.to_string(),
            item_description: "Cordless".to_string(),
            rental_fee: Decimal::new(15, 1),
            deposit_amount: Decimal::from(10),
            uploaded_images: vec!["https://example.com/drill.png".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_then_get_by_id_should_roundtrip() {
        let store = MemoryListingStore::new();

        let created = store.create(sample_listing("Drill")).await.unwrap();
        assert_eq!(created.id.len(), 24);

        let fetched = store.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_id_should_not_find() {
        let store = MemoryListingStore::new();
        store.create(sample_listing("Drill")).await.unwrap();

        let absent = ObjectId::new().to_hex();
        let result = store.get_by_id(&absent).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_by_id_malformed_id_should_not_find() {
        let store = MemoryListingStore::new();

        for id in ["", "does-not-exist", "0x1234", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            let result = store.get_by_id(id).await;
            assert!(matches!(result, Err(StoreError::NotFound)), "id: {id:?}");
        }
    }

    #[tokio::test]
    async fn test_list_all_should_return_each_created_record_once_in_order() {
        let store = MemoryListingStore::new();

        let mut created = Vec::new();
        for name in ["Drill", "Ladder", "Tent"] {
            created.push(store.create(sample_listing(name)).await.unwrap());
        }

        let all = store.list_all().await.unwrap();
        assert_eq!(all, created);
    }

    #[tokio::test]
    async fn test_list_all_empty_store_should_return_no_records() {
        let store = MemoryListingStore::new();
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
