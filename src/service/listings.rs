use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use super::{ServiceError, ServiceResult};
use crate::repository::{ListingStore, NewListing, StoredListing};

/// Incoming listing payload. Strings default to empty (absent and `null`
/// alike) and numbers to `None` so that missing fields surface through
/// validation as a named field list instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPayload {
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub owner_address: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub item_name: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub item_description: String,
    pub rental_fee: Option<Decimal>,
    pub deposit_amount: Option<Decimal>,
    #[serde(default)]
    pub uploaded_images: Vec<String>,
}

/// Maps validated listing payloads onto [`ListingStore`] calls. Does not
/// check numeric ranges, image URL shape, or that `owner_address` belongs
/// to any authenticated wallet.
pub struct ListingService {
    store: Arc<dyn ListingStore>,
}

impl ListingService {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }

    /// Validates that every required field is present and non-empty, then
    /// persists the listing. `uploaded_images` is optional and may be empty;
    /// its order is preserved as display order.
    #[instrument(skip(self, payload))]
    pub async fn submit_listing(&self, payload: ListingPayload) -> ServiceResult<StoredListing> {
        let mut missing = Vec::new();

        if payload.owner_address.is_empty() {
            missing.push("ownerAddress".to_string());
        }
        if payload.item_name.is_empty() {
            missing.push("itemName".to_string());
        }
        if payload.item_description.is_empty() {
            missing.push("itemDescription".to_string());
        }

        let rental_fee = payload.rental_fee.unwrap_or_else(|| {
            missing.push("rentalFee".to_string());
            Decimal::ZERO
        });
        let deposit_amount = payload.deposit_amount.unwrap_or_else(|| {
            missing.push("depositAmount".to_string());
            Decimal::ZERO
        });

        if !missing.is_empty() {
            return Err(ServiceError::Validation(missing));
        }

        let new_listing = NewListing {
            owner_address: payload.owner_address,
            item_name: payload.item_name,
            item_description: payload.item_description,
            rental_fee,
            deposit_amount,
            uploaded_images: payload.uploaded_images,
        };

        Ok(self.store.create(new_listing).await?)
    }

    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> ServiceResult<Vec<StoredListing>> {
        Ok(self.store.list_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn fetch_one(&self, id: &str) -> ServiceResult<StoredListing> {
        Ok(self.store.get_by_id(id).await?)
    }
}
