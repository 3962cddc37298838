//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id, salted, memory-hard)
//! - Signed access tokens (HMAC-SHA256, self-contained claims)
//! - Outbound mail (SMTP via lettre, best-effort by contract of the callers)

pub mod mailer;
pub mod password;
pub mod token;

// Re-export the underlying mail crate so downstream crates (and their test
// doubles) can name its types without a direct dependency.
pub use lettre;
