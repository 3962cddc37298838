//! User Name Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum username length in characters
const USER_NAME_MAX_LENGTH: usize = 32;

/// Username value object
///
/// Trimmed, non-empty, at most [`USER_NAME_MAX_LENGTH`] characters,
/// restricted to ASCII alphanumerics plus `_`, `.` and `-`. Uniqueness
/// is enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new username with validation
    pub fn new(user_name: impl Into<String>) -> AppResult<Self> {
        let user_name = user_name.into().trim().to_string();

        if user_name.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }

        if user_name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if !user_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
        {
            return Err(AppError::bad_request(
                "Username may only contain letters, digits, '_', '.' and '-'",
            ));
        }

        Ok(Self(user_name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(user_name: impl Into<String>) -> Self {
        Self(user_name.into())
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
