use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::info;

use super::auth::require_role;
use super::{ApiError, AppState, SupplierMutationRequest};
use crate::models::{Role, Supplier};

/// GET /suppliers
/// Unfiltered and unauthenticated; suppliers are informational only.
pub async fn list_suppliers(State(state): State<Arc<AppState>>) -> Json<Vec<Supplier>> {
    Json(state.store.list_suppliers().await)
}

/// POST /suppliers
pub async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SupplierMutationRequest>,
) -> Result<(StatusCode, Json<Supplier>), ApiError> {
    require_role(&state, &payload.credentials, &[Role::Admin])?;

    let supplier = payload
        .supplier
        .ok_or_else(|| ApiError::validation("Invalid supplier data"))?;
    let name = supplier
        .name
        .ok_or_else(|| ApiError::validation("Invalid supplier data"))?;
    let contact_info = supplier.contact_info.unwrap_or_default();

    let supplier = state.store.insert_supplier(name, contact_info).await;
    info!(id = supplier.id, "supplier created");

    Ok((StatusCode::CREATED, Json(supplier)))
}
