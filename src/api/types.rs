use serde::{Deserialize, Serialize};

use crate::models::{ProductPatch, Role};

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Credentials embedded in a request body. Mutating endpoints carry
/// these on every call; there is no token or session equivalent.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query parameters accepted by GET /products.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock_status: Option<String>,
}

/// Body for POST /products and PUT /products/{id}. The same partial
/// product shape serves both; the create handler additionally requires
/// every field to be present.
#[derive(Debug, Deserialize)]
pub struct ProductMutationRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default)]
    pub product: Option<ProductPatch>,
}

/// Body for PUT /products/{id}/stock. `change` is kept as a raw JSON
/// value so a missing, zero, or non-integer delta can be rejected with
/// 400 instead of a body-rejection status.
#[derive(Debug, Deserialize)]
pub struct StockAdjustRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default)]
    pub change: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct SupplierPayload {
    pub name: Option<String>,
    pub contact_info: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SupplierMutationRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default)]
    pub supplier: Option<SupplierPayload>,
}

/// Body for endpoints that carry nothing but credentials.
#[derive(Debug, Deserialize)]
pub struct AuthOnlyRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
}
