use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("listing not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}
