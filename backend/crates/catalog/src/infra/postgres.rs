//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, ProductId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Product;
use crate::domain::repository::{OwnerDirectory, ProductRepository};
use crate::domain::value_objects::{Price, ProductName};
use crate::error::CatalogResult;

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgCatalogRepository {
    async fn insert(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                owner_id,
                name,
                description,
                price,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(product.owner_id.as_uuid())
        .bind(product.name.as_str())
        .bind(product.description.as_deref())
        .bind(product.price.value())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_owner(&self, owner_id: &AccountId) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                owner_id,
                name,
                description,
                price,
                created_at,
                updated_at
            FROM products
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn update(
        &self,
        product_id: &ProductId,
        owner_id: &AccountId,
        name: ProductName,
        description: Option<String>,
        price: Price,
    ) -> CatalogResult<Option<Product>> {
        // Owner scoping in the WHERE clause: a foreign product updates
        // zero rows, exactly like a missing one.
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products SET
                name = $3,
                description = $4,
                price = $5,
                updated_at = $6
            WHERE product_id = $1 AND owner_id = $2
            RETURNING
                product_id,
                owner_id,
                name,
                description,
                price,
                created_at,
                updated_at
            "#,
        )
        .bind(product_id.as_uuid())
        .bind(owner_id.as_uuid())
        .bind(name.as_str())
        .bind(description.as_deref())
        .bind(price.value())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn delete(
        &self,
        product_id: &ProductId,
        owner_id: &AccountId,
    ) -> CatalogResult<Option<ProductName>> {
        let name = sqlx::query_scalar::<_, String>(
            r#"
            DELETE FROM products
            WHERE product_id = $1 AND owner_id = $2
            RETURNING name
            "#,
        )
        .bind(product_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(name.map(ProductName::from_db))
    }
}

impl OwnerDirectory for PgCatalogRepository {
    async fn email_of(&self, owner_id: &AccountId) -> CatalogResult<Option<String>> {
        let email = sqlx::query_scalar::<_, String>(
            "SELECT email FROM accounts WHERE account_id = $1",
        )
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(email)
    }
}

// ============================================================================
// Row Mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    owner_id: Uuid,
    name: String,
    description: Option<String>,
    price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            owner_id: AccountId::from_uuid(self.owner_id),
            name: ProductName::from_db(self.name),
            description: self.description,
            price: Price::from_db(self.price),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
