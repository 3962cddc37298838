//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::token::TOKEN_SECRET_LEN;
use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC signing secret for access tokens (32 bytes)
    pub token_secret: [u8; TOKEN_SECRET_LEN],
    /// Access token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; TOKEN_SECRET_LEN],
            token_ttl: Duration::from_secs(3600), // 1 hour
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; TOKEN_SECRET_LEN];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
