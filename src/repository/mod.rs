pub mod error;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
pub use error::StoreError;
pub use memory::MemoryListingStore;
pub use mongo::MongoListingStore;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub(crate) type StoreResult<T> = std::result::Result<T, StoreError>;

/// A listing as handed to the store for creation. The store assigns the id
/// and the creation timestamp; everything else arrives from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub owner_address: String,
    pub item_name: String,
    pub item_description: String,
    pub rental_fee: Decimal,
    pub deposit_amount: Decimal,
    pub uploaded_images: Vec<String>,
}

/// A persisted listing. `id` and `created_at` are assigned exactly once, at
/// creation; no operation mutates a stored listing afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredListing {
    pub id: String,
    pub owner_address: String,
    pub item_name: String,
    pub item_description: String,
    pub rental_fee: Decimal,
    pub deposit_amount: Decimal,
    pub uploaded_images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Trait for listing persistence.
///
/// Implementations must make `create` durable before returning and serialize
/// concurrent inserts themselves; the service layer does no locking of its
/// own (the model is create-and-read only, so there are no write-write
/// conflicts beyond single-record inserts).
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Persists a new listing, assigning its id and creation timestamp.
    ///
    /// # Returns
    ///
    /// * `Ok(StoredListing)` - The full stored record, durable at this point
    /// * `Err(StoreError)` - If the backing store rejects the write
    async fn create(&self, new: NewListing) -> StoreResult<StoredListing>;

    /// Returns every stored listing in insertion order.
    ///
    /// No pagination: callers must assume a full scan whose cost grows with
    /// the collection.
    async fn list_all(&self) -> StoreResult<Vec<StoredListing>>;

    /// Exact-match lookup by id.
    ///
    /// # Returns
    ///
    /// * `Ok(StoredListing)` - The matching record
    /// * `Err(StoreError::NotFound)` - If no record has that id, or the id is
    ///   malformed for the store's identifier scheme
    async fn get_by_id(&self, id: &str) -> StoreResult<StoredListing>;
}
