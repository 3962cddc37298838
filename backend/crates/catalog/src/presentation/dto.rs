//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Product;

/// Request body for POST /products and PUT /products/{id}
///
/// Fields are `Option` so that "field missing" surfaces as the
/// application's own validation error instead of a deserialization
/// failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Product representation returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: *product.product_id.as_uuid(),
            name: product.name.as_str().to_string(),
            description: product.description.clone(),
            price: product.price.value(),
            owner_id: *product.owner_id.as_uuid(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Response for DELETE /products/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductResponse {
    pub message: String,
}
