//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router. The access guard itself lives in the
//! auth crate; this router only mounts it.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CatalogAppState;
pub use router::{catalog_router, catalog_router_generic};
