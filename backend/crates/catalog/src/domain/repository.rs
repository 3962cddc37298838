//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::Product;
use crate::domain::value_objects::{Price, ProductName};
use crate::error::CatalogResult;
use kernel::id::{AccountId, ProductId};

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Persist a new product
    async fn insert(&self, product: &Product) -> CatalogResult<()>;

    /// All products owned by `owner_id`, newest first
    async fn list_by_owner(&self, owner_id: &AccountId) -> CatalogResult<Vec<Product>>;

    /// Replace the mutable fields of an owned product.
    ///
    /// Returns the updated product, or `None` when the product does not
    /// exist or belongs to another account; the caller cannot tell the
    /// difference.
    async fn update(
        &self,
        product_id: &ProductId,
        owner_id: &AccountId,
        name: ProductName,
        description: Option<String>,
        price: Price,
    ) -> CatalogResult<Option<Product>>;

    /// Delete an owned product, returning its name for the notification
    async fn delete(
        &self,
        product_id: &ProductId,
        owner_id: &AccountId,
    ) -> CatalogResult<Option<ProductName>>;
}

/// Owner email lookup for notifications
#[trait_variant::make(OwnerDirectory: Send)]
pub trait LocalOwnerDirectory {
    /// Email of the owning account, if the account still exists
    async fn email_of(&self, owner_id: &AccountId) -> CatalogResult<Option<String>>;
}
