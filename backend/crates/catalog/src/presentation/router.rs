//! Catalog Router
//!
//! All routes are behind the access guard; every handler sees a verified
//! [`auth::CurrentAccount`].

use axum::{
    Router, middleware,
    routing::{get, put},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::presentation::middleware::require_account;
use platform::mailer::{Notifier, SmtpMailer};

use crate::domain::repository::{OwnerDirectory, ProductRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router with PostgreSQL repository and SMTP notifier
pub fn catalog_router(
    repo: PgCatalogRepository,
    mailer: SmtpMailer,
    auth_config: Arc<AuthConfig>,
) -> Router {
    catalog_router_generic(repo, mailer, auth_config)
}

/// Create a generic catalog router for any repository/notifier implementation
pub fn catalog_router_generic<R, N>(repo: R, notifier: N, auth_config: Arc<AuthConfig>) -> Router
where
    R: ProductRepository + OwnerDirectory + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_products::<R, N>).post(handlers::create_product::<R, N>),
        )
        .route(
            "/{id}",
            put(handlers::update_product::<R, N>).delete(handlers::delete_product::<R, N>),
        )
        .route_layer(middleware::from_fn_with_state(auth_config, require_account))
        .with_state(state)
}
