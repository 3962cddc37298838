//! Domain Value Objects

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum product name length in characters
const PRODUCT_NAME_MAX_LENGTH: usize = 128;

/// Product name value object
///
/// Trimmed, non-empty, at most [`PRODUCT_NAME_MAX_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductName(String);

impl ProductName {
    /// Create a new product name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Product name cannot be empty"));
        }

        if name.chars().count() > PRODUCT_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Product name must be at most {} characters",
                PRODUCT_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Price value object
///
/// Finite and non-negative; zero is a valid price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    /// Create a new price with validation
    pub fn new(value: f64) -> AppResult<Self> {
        if !value.is_finite() {
            return Err(AppError::bad_request("Price must be a finite number"));
        }

        if value < 0.0 {
            return Err(AppError::bad_request("Price cannot be negative"));
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    /// Get the numeric value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
