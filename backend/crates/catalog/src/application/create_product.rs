//! Create Product Use Case

use std::sync::Arc;

use kernel::id::AccountId;
use platform::mailer::Notifier;

use crate::application::{normalize_description, notify_owner};
use crate::domain::entities::Product;
use crate::domain::repository::{OwnerDirectory, ProductRepository};
use crate::domain::value_objects::{Price, ProductName};
use crate::error::{CatalogError, CatalogResult};

/// Create product input
pub struct CreateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Create product use case
pub struct CreateProductUseCase<R, N>
where
    R: ProductRepository + OwnerDirectory,
    N: Notifier,
{
    product_repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> CreateProductUseCase<R, N>
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

    pub async fn execute(
        &self,
        owner_id: AccountId,
        input: CreateProductInput,
    ) -> CatalogResult<Product> {
        let Some(name) = input.name else {
            return Err(CatalogError::Validation(
                "Product name is required".to_string(),
            ));
        };
        let Some(price) = input.price else {
            return Err(CatalogError::Validation(
                "Product price is required".to_string(),
            ));
        };

        let name = ProductName::new(name)?;
        let price = Price::new(price)?;
        let description = normalize_description(input.description);

        let product = Product::new(owner_id, name, description, price);

        self.product_repo.insert(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            owner_id = %owner_id,
            "Product created"
        );

        notify_owner(
            self.product_repo.as_ref(),
            self.notifier.as_ref(),
            &owner_id,
            "Product Created",
            format!(
                "Your product \"{}\" has been created successfully.",
                product.name
            ),
        )
        .await;

        Ok(product)
    }
}
