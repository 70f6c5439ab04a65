use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ListingStore, NewListing, StoreError, StoreResult, StoredListing};
use crate::config::DatabaseConfig;

const COLLECTION_NAME: &str = "listings";

/// Upper bound on server selection so a dead cluster surfaces as an error
/// instead of hanging a request.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Wire shape of a listing document in MongoDB. `_id` and `createdAt` are
/// assigned here; the rest mirrors [`StoredListing`] field for field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    owner_address: String,
    item_name: String,
    item_description: String,
    rental_fee: Decimal,
    deposit_amount: Decimal,
    uploaded_images: Vec<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl From<ListingDocument> for StoredListing {
    fn from(doc: ListingDocument) -> Self {
        StoredListing {
            id: doc.id.to_hex(),
            owner_address: doc.owner_address,
            item_name: doc.item_name,
            item_description: doc.item_description,
            rental_fee: doc.rental_fee,
            deposit_amount: doc.deposit_amount,
            uploaded_images: doc.uploaded_images,
            created_at: doc.created_at,
        }
    }
}

/// MongoDB-backed [`ListingStore`]. Inserts are acknowledged by the driver
/// before `create` returns, which is the durability point callers rely on.
pub struct MongoListingStore {
    collection: Collection<ListingDocument>,
}

impl MongoListingStore {
    /// Connects to the configured database and pings it, so an unreachable
    /// or misconfigured cluster fails here (at startup) rather than on the
    /// first request.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(database = %config.name, "connected to MongoDB");

        Ok(Self {
            collection: database.collection(COLLECTION_NAME),
        })
    }
}

#[async_trait]
impl ListingStore for MongoListingStore {
    #[instrument(skip(self, new))]
    async fn create(&self, new: NewListing) -> StoreResult<StoredListing> {
        // BSON datetimes carry millisecond precision; assign the timestamp at
        // that precision so the returned record matches later reads exactly.
        let document = ListingDocument {
            id: ObjectId::new(),
            owner_address: new.owner_address,
            item_name: new.item_name,
            item_description: new.item_description,
            rental_fee: new.rental_fee,
            deposit_amount: new.deposit_amount,
            uploaded_images: new.uploaded_images,
            created_at: mongodb::bson::DateTime::now().to_chrono(),
        };

        self.collection.insert_one(&document).await?;

        Ok(document.into())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> StoreResult<Vec<StoredListing>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ListingDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> StoreResult<StoredListing> {
        // A syntactically invalid id can never name a stored document.
        let object_id = ObjectId::parse_str(id).map_err(|_| StoreError::NotFound)?;

        let document = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await?
            .ok_or(StoreError::NotFound)?;

        Ok(document.into())
    }
}
