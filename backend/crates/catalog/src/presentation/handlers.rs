//! HTTP Handlers
//!
//! Every handler reads the caller's identity from [`CurrentAccount`],
//! inserted by the access guard; the request body never carries an owner.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::presentation::middleware::CurrentAccount;
use kernel::id::ProductId;
use platform::mailer::Notifier;

use crate::application::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, ListProductsUseCase,
    UpdateProductInput, UpdateProductUseCase,
};
use crate::domain::repository::{OwnerDirectory, ProductRepository};
use crate::error::CatalogResult;
use crate::presentation::dto::{DeleteProductResponse, ProductBody, ProductResponse};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R, N>
where
    R: ProductRepository + OwnerDirectory + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
}

/// POST /products
pub async fn create_product<R, N>(
    State(state): State<CatalogAppState<R, N>>,
    Extension(current): Extension<CurrentAccount>,
    Json(req): Json<ProductBody>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OwnerDirectory + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let use_case = CreateProductUseCase::new(state.repo.clone(), state.notifier.clone());

    let input = CreateProductInput {
        name: req.name,
        description: req.description,
        price: req.price,
    };

    let product = use_case.execute(current.account_id, input).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(&product))))
}

/// GET /products
pub async fn list_products<R, N>(
    State(state): State<CatalogAppState<R, N>>,
    Extension(current): Extension<CurrentAccount>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + OwnerDirectory + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let use_case = ListProductsUseCase::new(state.repo.clone());

    let products = use_case.execute(current.account_id).await?;

    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// PUT /products/{id}
pub async fn update_product<R, N>(
    State(state): State<CatalogAppState<R, N>>,
    Extension(current): Extension<CurrentAccount>,
    Path(product_id): Path<Uuid>,
    Json(req): Json<ProductBody>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + OwnerDirectory + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProductUseCase::new(state.repo.clone(), state.notifier.clone());

    let input = UpdateProductInput {
        name: req.name,
        description: req.description,
        price: req.price,
    };

    let product = use_case
        .execute(current.account_id, ProductId::from_uuid(product_id), input)
        .await?;

    Ok(Json(ProductResponse::from(&product)))
}

/// DELETE /products/{id}
pub async fn delete_product<R, N>(
    State(state): State<CatalogAppState<R, N>>,
    Extension(current): Extension<CurrentAccount>,
    Path(product_id): Path<Uuid>,
) -> CatalogResult<Json<DeleteProductResponse>>
where
    R: ProductRepository + OwnerDirectory + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let use_case = DeleteProductUseCase::new(state.repo.clone(), state.notifier.clone());

    use_case
        .execute(current.account_id, ProductId::from_uuid(product_id))
        .await?;

    Ok(Json(DeleteProductResponse {
        message: "Product deleted".to_string(),
    }))
}
