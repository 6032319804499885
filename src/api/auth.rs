use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::info;

use super::{ApiError, AppState, Credentials, LoginResponse};
use crate::models::Role;

/// POST /login
/// Stateless credential check: returns the role on success, issues
/// nothing a caller could reuse on later requests.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    let role = state
        .credentials
        .authenticate(&payload.username, &payload.password)
        .map_err(|_| ApiError::invalid_credentials())?;

    info!(username = %payload.username, role = role.as_str(), "login");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        username: payload.username,
        role,
    }))
}

/// Authenticates the body-embedded credentials and checks the role
/// against the endpoint's allow-list. Bad credentials and a
/// disallowed role are indistinguishable to the caller: both 403.
pub fn require_role(
    state: &AppState,
    credentials: &Credentials,
    allowed: &[Role],
) -> Result<Role, ApiError> {
    let role = state
        .credentials
        .authenticate(&credentials.username, &credentials.password)
        .map_err(|_| ApiError::unauthorized_access())?;

    if !allowed.contains(&role) {
        return Err(ApiError::unauthorized_access());
    }

    Ok(role)
}
