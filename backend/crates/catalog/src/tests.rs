//! Unit tests for catalog crate
//!
//! Use cases run against an in-memory store and a recording notifier;
//! the Postgres implementations are covered by the same repository traits.

mod support {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use kernel::id::{AccountId, ProductId};
    use platform::mailer::{MailerError, Notifier};

    use crate::domain::entities::Product;
    use crate::domain::repository::{OwnerDirectory, ProductRepository};
    use crate::domain::value_objects::{Price, ProductName};
    use crate::error::CatalogResult;

    /// In-memory product store with an owner email directory
    #[derive(Default)]
    pub struct InMemoryCatalog {
        products: Mutex<Vec<Product>>,
        emails: Mutex<HashMap<AccountId, String>>,
    }

    impl InMemoryCatalog {
        pub fn with_owner(owner_id: AccountId, email: &str) -> Self {
            let catalog = Self::default();
            catalog
                .emails
                .lock()
                .unwrap()
                .insert(owner_id, email.to_string());
            catalog
        }

        pub fn count(&self) -> usize {
            self.products.lock().unwrap().len()
        }

        pub fn find(&self, product_id: &ProductId) -> Option<Product> {
            self.products
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.product_id == product_id)
                .cloned()
        }
    }

    impl ProductRepository for InMemoryCatalog {
        async fn insert(&self, product: &Product) -> CatalogResult<()> {
            self.products.lock().unwrap().push(product.clone());
            Ok(())
        }

        async fn list_by_owner(&self, owner_id: &AccountId) -> CatalogResult<Vec<Product>> {
            let mut products: Vec<Product> = self
                .products
                .lock()
                .unwrap()
                .iter()
                .filter(|p| &p.owner_id == owner_id)
                .cloned()
                .collect();
            products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(products)
        }

        async fn update(
            &self,
            product_id: &ProductId,
            owner_id: &AccountId,
            name: ProductName,
            description: Option<String>,
            price: Price,
        ) -> CatalogResult<Option<Product>> {
            let mut products = self.products.lock().unwrap();

            let Some(product) = products
                .iter_mut()
                .find(|p| &p.product_id == product_id && &p.owner_id == owner_id)
            else {
                return Ok(None);
            };

            product.apply_update(name, description, price);
            Ok(Some(product.clone()))
        }

        async fn delete(
            &self,
            product_id: &ProductId,
            owner_id: &AccountId,
        ) -> CatalogResult<Option<ProductName>> {
            let mut products = self.products.lock().unwrap();

            let position = products
                .iter()
                .position(|p| &p.product_id == product_id && &p.owner_id == owner_id);

            Ok(position.map(|i| products.remove(i).name))
        }
    }

    impl OwnerDirectory for InMemoryCatalog {
        async fn email_of(&self, owner_id: &AccountId) -> CatalogResult<Option<String>> {
            Ok(self.emails.lock().unwrap().get(owner_id).cloned())
        }
    }

    /// Recording notifier; with `fail` set, every send errors
    #[derive(Default)]
    pub struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl RecordingNotifier {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn sent_subjects(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|(_, subject)| subject.clone())
                .collect()
        }

        pub fn sent_recipients(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|(to, _)| to.clone())
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<(), MailerError> {
            if self.fail {
                let err = "missing-at-sign"
                    .parse::<platform::lettre::Address>()
                    .unwrap_err();
                return Err(err.into());
            }

            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod value_object_tests {
    use crate::domain::value_objects::*;

    #[test]
    fn test_product_name_valid() {
        assert_eq!(ProductName::new("Widget").unwrap().as_str(), "Widget");
        assert_eq!(ProductName::new("  Widget  ").unwrap().as_str(), "Widget");
    }

    #[test]
    fn test_product_name_invalid() {
        assert!(ProductName::new("").is_err());
        assert!(ProductName::new("   ").is_err());
        assert!(ProductName::new("x".repeat(129)).is_err());
    }

    #[test]
    fn test_price_valid() {
        assert_eq!(Price::new(9.99).unwrap().value(), 9.99);
        assert_eq!(Price::new(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn test_price_invalid() {
        assert!(Price::new(-1.0).is_err());
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::entities::Product;
    use crate::domain::value_objects::{Price, ProductName};
    use crate::presentation::dto::*;
    use kernel::id::AccountId;

    #[test]
    fn test_product_response_serialization() {
        let product = Product::new(
            AccountId::new(),
            ProductName::new("Widget").unwrap(),
            Some("d".to_string()),
            Price::new(9.99).unwrap(),
        );

        let json = serde_json::to_string(&ProductResponse::from(&product)).unwrap();
        assert!(json.contains(r#""name":"Widget""#));
        assert!(json.contains(r#""price":9.99"#));
        assert!(json.contains("ownerId"));
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
    }

    #[test]
    fn test_product_body_deserialization() {
        let body: ProductBody =
            serde_json::from_str(r#"{"name":"Widget","description":"d","price":9.99}"#).unwrap();
        assert_eq!(body.name.as_deref(), Some("Widget"));
        assert_eq!(body.description.as_deref(), Some("d"));
        assert_eq!(body.price, Some(9.99));
    }

    #[test]
    fn test_product_body_missing_fields_deserialize_as_none() {
        let body: ProductBody = serde_json::from_str(r#"{"description":"d"}"#).unwrap();
        assert!(body.name.is_none());
        assert!(body.price.is_none());
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::CatalogError;
    use axum::http::StatusCode;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            CatalogError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::ProductNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CatalogError::ProductNotFound.to_string(), "Product not found");
        assert_eq!(
            CatalogError::Validation("Price cannot be negative".into()).to_string(),
            "Price cannot be negative"
        );
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use super::support::{InMemoryCatalog, RecordingNotifier};
    use crate::application::{
        CreateProductInput, CreateProductUseCase, DeleteProductUseCase, ListProductsUseCase,
        UpdateProductInput, UpdateProductUseCase,
    };
    use crate::error::CatalogError;
    use kernel::id::{AccountId, ProductId};

    fn body(name: Option<&str>, description: Option<&str>, price: Option<f64>) -> CreateProductInput {
        CreateProductInput {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            price,
        }
    }

    fn update_body(name: &str, description: Option<&str>, price: f64) -> UpdateProductInput {
        UpdateProductInput {
            name: Some(name.to_string()),
            description: description.map(str::to_string),
            price: Some(price),
        }
    }

    #[tokio::test]
    async fn test_create_persists_and_notifies_owner() {
        let owner = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(owner, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());

        let product = CreateProductUseCase::new(repo.clone(), notifier.clone())
            .execute(owner, body(Some("Widget"), Some("d"), Some(9.99)))
            .await
            .unwrap();

        assert_eq!(product.name.as_str(), "Widget");
        assert_eq!(product.price.value(), 9.99);
        assert_eq!(product.owner_id, owner);
        assert_eq!(repo.count(), 1);
        assert_eq!(notifier.sent_subjects(), vec!["Product Created"]);
        assert_eq!(notifier.sent_recipients(), vec!["alice@x.com"]);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price_and_persists_nothing() {
        let owner = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(owner, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());

        let err = CreateProductUseCase::new(repo.clone(), notifier.clone())
            .execute(owner, body(Some("Widget"), None, Some(-1.0)))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(repo.count(), 0);
        assert!(notifier.sent_subjects().is_empty());
    }

    #[tokio::test]
    async fn test_create_requires_name_and_price() {
        let owner = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(owner, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = CreateProductUseCase::new(repo.clone(), notifier);

        let err = use_case
            .execute(owner, body(None, Some("d"), Some(1.0)))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        let err = use_case
            .execute(owner, body(Some("Widget"), None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(alice, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());
        let create = CreateProductUseCase::new(repo.clone(), notifier);

        create
            .execute(alice, body(Some("Widget"), None, Some(9.99)))
            .await
            .unwrap();
        create
            .execute(bob, body(Some("Gadget"), None, Some(1.0)))
            .await
            .unwrap();

        let products = ListProductsUseCase::new(repo)
            .execute(alice)
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name.as_str(), "Widget");
        assert_eq!(products[0].owner_id, alice);
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields() {
        let owner = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(owner, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());

        let product = CreateProductUseCase::new(repo.clone(), notifier.clone())
            .execute(owner, body(Some("Widget"), Some("old"), Some(9.99)))
            .await
            .unwrap();

        let updated = UpdateProductUseCase::new(repo.clone(), notifier.clone())
            .execute(owner, product.product_id, update_body("Widget Pro", None, 19.99))
            .await
            .unwrap();

        assert_eq!(updated.product_id, product.product_id);
        assert_eq!(updated.owner_id, owner);
        assert_eq!(updated.name.as_str(), "Widget Pro");
        assert!(updated.description.is_none());
        assert_eq!(updated.price.value(), 19.99);
        assert!(updated.updated_at >= product.updated_at);
        assert_eq!(
            notifier.sent_subjects(),
            vec!["Product Created", "Product Updated"]
        );
    }

    #[tokio::test]
    async fn test_update_foreign_product_is_not_found() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(alice, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());

        let product = CreateProductUseCase::new(repo.clone(), notifier.clone())
            .execute(alice, body(Some("Widget"), None, Some(9.99)))
            .await
            .unwrap();

        let err = UpdateProductUseCase::new(repo.clone(), notifier)
            .execute(bob, product.product_id, update_body("Stolen", None, 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::ProductNotFound));

        // Store unchanged
        let unchanged = repo.find(&product.product_id).unwrap();
        assert_eq!(unchanged.name.as_str(), "Widget");
        assert_eq!(unchanged.price.value(), 9.99);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let owner = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(owner, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());

        let err = UpdateProductUseCase::new(repo, notifier)
            .execute(owner, ProductId::new(), update_body("Widget", None, 1.0))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::ProductNotFound));
    }

    #[tokio::test]
    async fn test_delete_then_list_is_empty() {
        let owner = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(owner, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());

        let product = CreateProductUseCase::new(repo.clone(), notifier.clone())
            .execute(owner, body(Some("Widget"), Some("d"), Some(9.99)))
            .await
            .unwrap();

        let listed = ListProductsUseCase::new(repo.clone())
            .execute(owner)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);

        let name = DeleteProductUseCase::new(repo.clone(), notifier.clone())
            .execute(owner, product.product_id)
            .await
            .unwrap();
        assert_eq!(name.as_str(), "Widget");

        let listed = ListProductsUseCase::new(repo.clone())
            .execute(owner)
            .await
            .unwrap();
        assert!(listed.is_empty());
        assert_eq!(
            notifier.sent_subjects(),
            vec!["Product Created", "Product Deleted"]
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let owner = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(owner, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());

        let err = DeleteProductUseCase::new(repo.clone(), notifier)
            .execute(owner, ProductId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::ProductNotFound));
    }

    #[tokio::test]
    async fn test_delete_foreign_product_is_not_found() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(alice, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::default());

        let product = CreateProductUseCase::new(repo.clone(), notifier.clone())
            .execute(alice, body(Some("Widget"), None, Some(9.99)))
            .await
            .unwrap();

        let err = DeleteProductUseCase::new(repo.clone(), notifier)
            .execute(bob, product.product_id)
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::ProductNotFound));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_mutation_succeeds_when_mail_fails() {
        let owner = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::with_owner(owner, "alice@x.com"));
        let notifier = Arc::new(RecordingNotifier::failing());

        let result = CreateProductUseCase::new(repo.clone(), notifier)
            .execute(owner, body(Some("Widget"), None, Some(9.99)))
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_mutation_succeeds_when_owner_email_missing() {
        // Owner not present in the directory at all
        let owner = AccountId::new();
        let repo = Arc::new(InMemoryCatalog::default());
        let notifier = Arc::new(RecordingNotifier::default());

        let result = CreateProductUseCase::new(repo.clone(), notifier.clone())
            .execute(owner, body(Some("Widget"), None, Some(9.99)))
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.count(), 1);
        assert!(notifier.sent_subjects().is_empty());
    }
}
