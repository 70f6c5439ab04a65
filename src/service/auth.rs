use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::verifier::verify_signature;
use super::{ServiceError, ServiceResult};

/// Body of a wallet connect request. Missing and `null` fields decode as
/// empty strings so that absence is reported as a credential problem, not a
/// decode fault.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectRequest {
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "super::string_or_empty")]
    pub signature: String,
}

#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub success: bool,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct DisconnectResponse {
    pub success: bool,
    pub message: String,
}

/// Stateless wallet authentication: a caller proves control of an address by
/// signing the configured challenge message. No session or token is issued,
/// so `connect` only verifies and `disconnect` only acknowledges.
///
/// The challenge is a fixed string, so a captured signature can be replayed
/// by any observer. Hardening that requires a per-session nonce, which is a
/// protocol change outside this service's contract.
#[derive(Debug, Clone)]
pub struct AuthService {
    challenge_message: String,
}

impl AuthService {
    pub fn new(challenge_message: impl Into<String>) -> Self {
        Self {
            challenge_message: challenge_message.into(),
        }
    }

    /// Verifies the signed challenge and echoes the address exactly as the
    /// caller sent it; normalization is the verifier's concern only.
    #[instrument(skip(self, req))]
    pub fn connect(&self, req: ConnectRequest) -> ServiceResult<ConnectResponse> {
        if req.address.is_empty() || req.signature.is_empty() {
            return Err(ServiceError::MissingCredentials);
        }

        if !verify_signature(&self.challenge_message, &req.address, &req.signature) {
            tracing::warn!(address = %req.address, "wallet signature verification failed");
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(ConnectResponse {
            success: true,
            address: req.address,
        })
    }

    /// Unconditional acknowledgment; there is no server-side session to tear
    /// down.
    pub fn disconnect(&self) -> ServiceResult<DisconnectResponse> {
        Ok(DisconnectResponse {
            success: true,
            message: "Wallet disconnected successfully".to_string(),
        })
    }
}
