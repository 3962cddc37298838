//! Domain Entities
//!
//! Core business entities for the catalog domain.

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, ProductId};

use crate::domain::value_objects::{Price, ProductName};

/// Product entity - an owned catalog record
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    /// Owning account; set at creation, never reassigned
    pub owner_id: AccountId,
    pub name: ProductName,
    pub description: Option<String>,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh id and timestamps
    pub fn new(
        owner_id: AccountId,
        name: ProductName,
        description: Option<String>,
        price: Price,
    ) -> Self {
        let now = Utc::now();

        Self {
            product_id: ProductId::new(),
            owner_id,
            name,
            description,
            price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields; id and ownership never change
    pub fn apply_update(&mut self, name: ProductName, description: Option<String>, price: Price) {
        self.name = name;
        self.description = description;
        self.price = price;
        self.updated_at = Utc::now();
    }
}
