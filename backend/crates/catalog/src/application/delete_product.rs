//! Delete Product Use Case

use std::sync::Arc;

use kernel::id::{AccountId, ProductId};
use platform::mailer::Notifier;

use crate::application::notify_owner;
use crate::domain::repository::{OwnerDirectory, ProductRepository};
use crate::domain::value_objects::ProductName;
use crate::error::{CatalogError, CatalogResult};

/// Delete product use case
pub struct DeleteProductUseCase<R, N>
where
    R: ProductRepository + OwnerDirectory,
    N: Notifier,
{
    product_repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> DeleteProductUseCase<R, N>
where
    R: ProductRepository + OwnerDirectory + Sync,
    N: Notifier + Sync,
{
    pub fn new(product_repo: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            product_repo,
            notifier,
        }
    }

    /// Returns the deleted product's name (used in the notification body).
    pub async fn execute(
        &self,
        owner_id: AccountId,
        product_id: ProductId,
    ) -> CatalogResult<ProductName> {
        let name = self
            .product_repo
            .delete(&product_id, &owner_id)
            .await?
            .ok_or(CatalogError::ProductNotFound)?;

        tracing::info!(
            product_id = %product_id,
            owner_id = %owner_id,
            "Product deleted"
        );

        notify_owner(
            self.product_repo.as_ref(),
            self.notifier.as_ref(),
            &owner_id,
            "Product Deleted",
            format!("Your product \"{}\" has been deleted.", name),
        )
        .await;

        Ok(name)
    }
}
