//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{Email, UserName};
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account.
    ///
    /// Uniqueness of username/email is enforced by the store; a concurrent
    /// duplicate registration surfaces as [`crate::AuthError::AccountExists`]
    /// from this call, not from the pre-check.
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Check if username or email is already registered
    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<bool>;
}
