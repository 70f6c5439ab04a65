pub mod auth;
pub mod error;
pub mod listings;
pub mod verifier;


pub use auth::{AuthService, ConnectRequest, ConnectResponse, DisconnectResponse};
pub use error::ServiceError;
pub use listings::{ListingPayload, ListingService};
pub use verifier::verify_signature;

pub(crate) type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Deserializes a nullable string field to its value, folding both absent
/// and `null` to the empty string so they surface through field validation
/// rather than as a body decode failure.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
