//! In-memory inventory store.
//!
//! All state lives behind a single `RwLock`; the lock covers both
//! collections and both id counters so concurrent handlers cannot
//! observe a half-applied mutation or hand out the same id twice.
//! Ids are monotonic and never reused, even after deletion.

use std::collections::BTreeMap;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{NewProduct, Product, ProductFilter, ProductPatch, Supplier};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Product not found")]
    ProductNotFound,
}

#[derive(Debug)]
struct Inner {
    // BTreeMap keyed by a monotonic id iterates in insertion order.
    products: BTreeMap<u64, Product>,
    suppliers: BTreeMap<u64, Supplier>,
    next_product_id: u64,
    next_supplier_id: u64,
}

#[derive(Debug)]
pub struct InventoryStore {
    inner: RwLock<Inner>,
}

impl InventoryStore {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Inner {
                products: BTreeMap::new(),
                suppliers: BTreeMap::new(),
                next_product_id: 1,
                next_supplier_id: 1,
            }),
        }
    }

    /// Store pre-populated with the demo catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let products = [
            ("Fiber Optic Cable", "Cables", 500, 100),
            ("Router X-500", "Networking", 50, 20),
            ("Modem Pro-100", "Networking", 75, 15),
            ("Satellite Dish", "Antennas", 10, 5),
        ];
        let suppliers = [
            ("Global Telecom Solutions", "contact@globaltele.com"),
            ("FiberLink Inc.", "sales@fiberlink.net"),
        ];

        let products: BTreeMap<u64, Product> = products
            .into_iter()
            .enumerate()
            .map(|(i, (name, category, stock_level, reorder_point))| {
                let id = i as u64 + 1;
                (
                    id,
                    Product {
                        id,
                        name: name.to_string(),
                        category: category.to_string(),
                        stock_level,
                        reorder_point,
                    },
                )
            })
            .collect();

        let suppliers: BTreeMap<u64, Supplier> = suppliers
            .into_iter()
            .enumerate()
            .map(|(i, (name, contact_info))| {
                let id = i as u64 + 1;
                (
                    id,
                    Supplier {
                        id,
                        name: name.to_string(),
                        contact_info: contact_info.to_string(),
                    },
                )
            })
            .collect();

        let next_product_id = products.len() as u64 + 1;
        let next_supplier_id = suppliers.len() as u64 + 1;

        Self {
            inner: RwLock::new(Inner {
                products,
                suppliers,
                next_product_id,
                next_supplier_id,
            }),
        }
    }

    /// Products matching the filter, in insertion order.
    pub async fn list_products(&self, filter: &ProductFilter) -> Vec<Product> {
        let inner = self.inner.read().await;
        inner
            .products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    pub async fn insert_product(&self, fields: NewProduct) -> Product {
        let mut inner = self.inner.write().await;
        let id = inner.next_product_id;
        inner.next_product_id += 1;

        let product = Product {
            id,
            name: fields.name,
            category: fields.category,
            stock_level: fields.stock_level,
            reorder_point: fields.reorder_point,
        };
        inner.products.insert(id, product.clone());
        product
    }

    /// Merges the patch onto the existing record. Absent fields are
    /// left untouched; the id cannot be changed.
    pub async fn update_product(
        &self,
        id: u64,
        patch: ProductPatch,
    ) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().await;
        let product = inner
            .products
            .get_mut(&id)
            .ok_or(StoreError::ProductNotFound)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(stock_level) = patch.stock_level {
            product.stock_level = stock_level;
        }
        if let Some(reorder_point) = patch.reorder_point {
            product.reorder_point = reorder_point;
        }

        Ok(product.clone())
    }

    /// Applies a signed delta to the stock level. No floor: the level
    /// may go negative.
    pub async fn adjust_stock(&self, id: u64, change: i64) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().await;
        let product = inner
            .products
            .get_mut(&id)
            .ok_or(StoreError::ProductNotFound)?;

        product.stock_level += change;
        Ok(product.clone())
    }

    pub async fn remove_product(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::ProductNotFound)
    }

    pub async fn contains_product(&self, id: u64) -> bool {
        self.inner.read().await.products.contains_key(&id)
    }

    /// All suppliers, in insertion order.
    pub async fn list_suppliers(&self) -> Vec<Supplier> {
        let inner = self.inner.read().await;
        inner.suppliers.values().cloned().collect()
    }

    pub async fn insert_supplier(&self, name: String, contact_info: String) -> Supplier {
        let mut inner = self.inner.write().await;
        let id = inner.next_supplier_id;
        inner.next_supplier_id += 1;

        let supplier = Supplier {
            id,
            name,
            contact_info,
        };
        inner.suppliers.insert(id, supplier.clone());
        supplier
    }
}
