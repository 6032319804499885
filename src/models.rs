use serde::{Deserialize, Serialize};

/// Access level attached to a credential. Governs which mutating
/// endpoints a user may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Staff => "Staff",
        }
    }
}

/// A static user account. Accounts are seeded at startup and never
/// mutated at runtime; passwords are stored in plaintext.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    /// Signed on purpose: adjustments may drive stock below zero and
    /// no floor is enforced.
    pub stock_level: i64,
    pub reorder_point: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Supplier {
    pub id: u64,
    pub name: String,
    pub contact_info: String,
}

/// Validated fields for a new product, after presence checks.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub stock_level: i64,
    pub reorder_point: i64,
}

/// Partial update applied to an existing product. Only these four
/// fields are mergeable; the id is never caller-writable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock_level: Option<i64>,
    pub reorder_point: Option<i64>,
}

/// Stock-level predicate usable on product queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// `stock_level < reorder_point`
    Low,
    /// `stock_level <= 0`
    OutOfStock,
}

impl StockStatus {
    /// Parses the `stock_status` query value. Unrecognized values are
    /// treated as no filter, matching the permissive query contract.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "out of stock" => Some(Self::OutOfStock),
            _ => None,
        }
    }

    #[must_use]
    pub const fn matches(self, product: &Product) -> bool {
        match self {
            Self::Low => product.stock_level < product.reorder_point,
            Self::OutOfStock => product.stock_level <= 0,
        }
    }
}

/// Conjunctive product filter: every supplied criterion must match.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock_status: Option<StockStatus>,
}

impl ProductFilter {
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name
            && !product.name.to_lowercase().contains(&name.to_lowercase())
        {
            return false;
        }

        if let Some(category) = &self.category
            && !product
                .category
                .to_lowercase()
                .contains(&category.to_lowercase())
        {
            return false;
        }

        if let Some(status) = self.stock_status
            && !status.matches(product)
        {
            return false;
        }

        true
    }
}
