pub mod api;
pub mod app;
pub mod config;
pub mod middleware;
pub mod repository;
pub mod service;

pub use app::build_app;
pub use repository::{ListingStore, MemoryListingStore, MongoListingStore, NewListing, StoredListing};
pub use service::{AuthService, ConnectRequest, ListingPayload, ListingService};
