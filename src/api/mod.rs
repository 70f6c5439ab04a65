pub mod auth;
pub mod error;
pub mod listings;


pub use error::ApiError;
