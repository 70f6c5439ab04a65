use thiserror::Error;

use crate::repository::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Connect was called without an address or without a signature.
    #[error("Address and signature are required")]
    MissingCredentials,

    /// The signature did not recover to the claimed address.
    #[error("Authentication failed")]
    InvalidCredentials,

    /// The listing payload is missing one or more required fields.
    #[error("missing required field(s): {}", .0.join(", "))]
    Validation(Vec<String>),

    /// No listing exists with the requested id.
    #[error("Listing not found")]
    NotFound,

    /// The backing store failed; details are logged, not surfaced.
    #[error("storage error: {0}")]
    Store(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::Database(msg) => ServiceError::Store(msg),
        }
    }
}
