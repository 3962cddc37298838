//! Account Entity
//!
//! The registered identity. Mutated only by password-change flows
//! (none implemented), never deleted by this core.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{AccountPassword, Email, UserName};

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Username (globally unique)
    pub user_name: UserName,
    /// Email address (globally unique, lowercased)
    pub email: Email,
    /// Argon2id hash; the plaintext is never stored
    pub password_hash: AccountPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a fresh id and timestamps
    pub fn new(user_name: UserName, email: Email, password_hash: AccountPassword) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            user_name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
