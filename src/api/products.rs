use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

use super::auth::require_role;
use super::{
    ApiError, AppState, AuthOnlyRequest, MessageResponse, ProductMutationRequest, ProductQuery,
    StockAdjustRequest,
};
use crate::models::{NewProduct, Product, ProductFilter, Role, StockStatus};

/// GET /products
/// Filters are conjunctive; empty or unrecognized values are ignored.
/// Never fails.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    let filter = ProductFilter {
        name: query.name.filter(|s| !s.is_empty()),
        category: query.category.filter(|s| !s.is_empty()),
        stock_status: query.stock_status.as_deref().and_then(StockStatus::parse),
    };

    Json(state.store.list_products(&filter).await)
}

/// POST /products
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProductMutationRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let role = require_role(&state, &payload.credentials, &[Role::Admin, Role::Manager])?;

    let fields = payload
        .product
        .and_then(|p| {
            Some(NewProduct {
                name: p.name?,
                category: p.category?,
                stock_level: p.stock_level?,
                reorder_point: p.reorder_point?,
            })
        })
        .ok_or_else(|| ApiError::validation("Invalid product data"))?;

    let product = state.store.insert_product(fields).await;
    info!(id = product.id, role = role.as_str(), "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id}
/// Merge, not replace: only supplied fields overwrite the record, and
/// only the four product fields are mergeable. A missing or empty
/// `product` object is a no-op that returns the record unchanged.
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(payload): Json<ProductMutationRequest>,
) -> Result<Json<Product>, ApiError> {
    require_role(&state, &payload.credentials, &[Role::Admin, Role::Manager])?;

    let patch = payload.product.unwrap_or_default();
    let product = state.store.update_product(id, patch).await?;

    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(payload): Json<AuthOnlyRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_role(&state, &payload.credentials, &[Role::Admin])?;

    state.store.remove_product(id).await?;
    info!(id, "product deleted");

    Ok(Json(MessageResponse {
        message: "Product deleted".to_string(),
    }))
}

/// PUT /products/{id}/stock
/// Applies a signed delta to the stock level. The delta must be a
/// nonzero JSON integer; the level itself is unbounded in both
/// directions.
pub async fn adjust_stock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(payload): Json<StockAdjustRequest>,
) -> Result<Json<Product>, ApiError> {
    let role = require_role(
        &state,
        &payload.credentials,
        &[Role::Admin, Role::Manager, Role::Staff],
    )?;

    // Unknown product wins over a bad delta, so probe before validating.
    if !state.store.contains_product(id).await {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }

    let change = payload
        .change
        .as_ref()
        .and_then(serde_json::Value::as_i64)
        .filter(|&c| c != 0)
        .ok_or_else(|| ApiError::validation("Invalid stock change value"))?;

    let product = state.store.adjust_stock(id, change).await?;
    info!(
        id,
        change,
        stock_level = product.stock_level,
        role = role.as_str(),
        "stock adjusted"
    );

    Ok(Json(product))
}
