use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::CredentialStore;
use crate::config::ServerConfig;
use crate::store::InventoryStore;

pub mod auth;
mod error;
mod products;
mod suppliers;
mod types;

pub use error::ApiError;
pub use types::*;

pub struct AppState {
    pub store: InventoryStore,

    pub credentials: CredentialStore,
}

impl AppState {
    /// State carrying the demo catalog and the three demo accounts.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            store: InventoryStore::seeded(),
            credentials: CredentialStore::with_default_accounts(),
        }
    }

    #[must_use]
    pub fn new(store: InventoryStore, credentials: CredentialStore) -> Self {
        Self { store, credentials }
    }
}

pub fn router(state: Arc<AppState>, server: &ServerConfig) -> Router {
    let cors_layer = if server.cors_allowed_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .cors_allowed_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/login", post(auth::login))
        .route("/products", get(products::list_products))
        .route("/products", post(products::create_product))
        .route("/products/{id}", put(products::update_product))
        .route("/products/{id}", delete(products::delete_product))
        .route("/products/{id}/stock", put(products::adjust_stock))
        .route("/suppliers", get(suppliers::list_suppliers))
        .route("/suppliers", post(suppliers::create_supplier))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
