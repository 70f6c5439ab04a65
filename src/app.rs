use std::any::Any;
use std::sync::Arc;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::config::Config;
use crate::middleware::trace::http_trace_layer;
use crate::repository::ListingStore;
use crate::service::{AuthService, ListingService};

/// Shared handler state. Both services are stateless beyond the store handle,
/// so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub listings: Arc<ListingService>,
}

pub fn build_app(config: &Config, store: Arc<dyn ListingStore>) -> Router {
    let state = AppState {
        auth: AuthService::new(&config.auth.challenge_message),
        listings: Arc::new(ListingService::new(store)),
    };

    Router::new()
        .route("/", get(welcome))
        .route("/auth/connect", post(api::auth::connect))
        .route("/auth/disconnect", post(api::auth::disconnect))
        .route(
            "/api/listings",
            post(api::listings::create_listing).get(api::listings::get_all_listings),
        )
        .route("/api/listings/{id}", get(api::listings::get_listing_by_id))
        .fallback(unmatched_route)
        .layer(http_trace_layer())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn welcome() -> &'static str {
    "Regrant API is running"
}

// The upstream contract answers unmatched routes with a generic 500 rather
// than a 404.
async fn unmatched_route() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal Server Error" })),
    )
}

/// Catch-all for handler panics: log the payload, answer with the same
/// generic 500 body as unmatched routes, keep the process alive.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!("request handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal Server Error" })),
    )
        .into_response()
}
