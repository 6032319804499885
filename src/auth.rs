//! Credential store and authenticator.
//!
//! Accounts are a fixed in-memory table; there is no registration,
//! hashing, lockout, or session state. Mutating endpoints resend raw
//! credentials in the request body and re-authenticate on every call.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Role, User};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Static username -> account mapping.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: HashMap<String, User>,
}

impl CredentialStore {
    #[must_use]
    pub fn new(accounts: impl IntoIterator<Item = User>) -> Self {
        let users = accounts
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        Self { users }
    }

    /// The three demo accounts the service ships with.
    #[must_use]
    pub fn with_default_accounts() -> Self {
        Self::new([
            User {
                username: "admin".to_string(),
                password: "adminpassword".to_string(),
                role: Role::Admin,
            },
            User {
                username: "manager".to_string(),
                password: "managerpassword".to_string(),
                role: Role::Manager,
            },
            User {
                username: "staff".to_string(),
                password: "staffpassword".to_string(),
                role: Role::Staff,
            },
        ])
    }

    /// Exact-match, case-sensitive plaintext comparison.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Role, AuthError> {
        self.users
            .get(username)
            .filter(|user| user.password == password)
            .map(|user| user.role)
            .ok_or(AuthError::InvalidCredentials)
    }
}
