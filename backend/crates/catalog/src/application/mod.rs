//! Application Layer
//!
//! Use cases, plus the shared best-effort notification step they all end
//! with.

pub mod create_product;
pub mod delete_product;
pub mod list_products;
pub mod update_product;

// Re-exports
pub use create_product::{CreateProductInput, CreateProductUseCase};
pub use delete_product::DeleteProductUseCase;
pub use list_products::ListProductsUseCase;
pub use update_product::{UpdateProductInput, UpdateProductUseCase};

use kernel::id::AccountId;
use platform::mailer::Notifier;

use crate::domain::repository::OwnerDirectory;

/// Resolve the owner's email and send a lifecycle notification.
///
/// Nothing here can fail the request: the store mutation is already
/// committed, so lookup and delivery failures are logged and dropped.
pub(crate) async fn notify_owner<D, N>(
    directory: &D,
    notifier: &N,
    owner_id: &AccountId,
    subject: &str,
    body: String,
) where
    D: OwnerDirectory + Sync,
    N: Notifier + Sync,
{
    let email = match directory.email_of(owner_id).await {
        Ok(Some(email)) => email,
        Ok(None) => {
            tracing::warn!(owner_id = %owner_id, "Owner has no account record, skipping notification");
            return;
        }
        Err(e) => {
            tracing::warn!(owner_id = %owner_id, error = %e, "Owner lookup failed, skipping notification");
            return;
        }
    };

    if let Err(e) = notifier.send(&email, subject, &body).await {
        tracing::warn!(
            owner_id = %owner_id,
            subject,
            error = %e,
            "Failed to send product notification"
        );
    }
}

/// Empty or whitespace-only descriptions are stored as absent.
pub(crate) fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
