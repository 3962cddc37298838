//! Catalog (Products) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Policy
//! Every mutating operation follows the same shape: validate the input,
//! perform exactly one store mutation scoped by the authenticated owner,
//! then best-effort notify the owner by email. A failed notification is
//! logged and swallowed; the mutation is already committed.
//!
//! ## Ownership Model
//! - `owner_id` comes from the access guard, never from the request body
//! - update/delete are scoped to the owner; a foreign product is
//!   indistinguishable from a missing one (404)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::catalog_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCatalogRepository as ProductStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
