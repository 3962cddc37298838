//! List Products Use Case
//!
//! Read-only; no notification step.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entities::Product;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// List products use case
pub struct ListProductsUseCase<R>
where
    R: ProductRepository,
{
    product_repo: Arc<R>,
}

impl<R> ListProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }

    /// All products owned by the caller; no pagination.
    pub async fn execute(&self, owner_id: AccountId) -> CatalogResult<Vec<Product>> {
        self.product_repo.list_by_owner(&owner_id).await
    }
}
