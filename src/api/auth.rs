use axum::Json;
use axum::extract::State;

use super::ApiError;
use crate::app::AppState;
use crate::service::{ConnectRequest, ConnectResponse, DisconnectResponse};

/// POST /auth/connect
pub async fn connect(
    State(state): State<AppState>,
    Json(req): Json<ConnectRequest>,
) -> Result<Json<ConnectResponse>, ApiError> {
    Ok(Json(state.auth.connect(req)?))
}

/// POST /auth/disconnect
pub async fn disconnect(
    State(state): State<AppState>,
) -> Result<Json<DisconnectResponse>, ApiError> {
    Ok(Json(state.auth.disconnect()?))
}
