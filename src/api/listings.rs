use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use crate::app::AppState;
use crate::repository::StoredListing;
use crate::service::ListingPayload;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    #[serde(rename = "newListing")]
    pub new_listing: StoredListing,
}

/// POST /api/listings
pub async fn create_listing(
    State(state): State<AppState>,
    Json(payload): Json<ListingPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let new_listing = state.listings.submit_listing(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Listing created successfully".to_string(),
            new_listing,
        }),
    ))
}

/// GET /api/listings
pub async fn get_all_listings(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredListing>>, ApiError> {
    Ok(Json(state.listings.fetch_all().await?))
}

/// GET /api/listings/{id}
pub async fn get_listing_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoredListing>, ApiError> {
    Ok(Json(state.listings.fetch_one(&id).await?))
}
