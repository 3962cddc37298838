//! Signed Access Tokens
//!
//! Self-contained bearer tokens: a JSON claims payload signed with
//! HMAC-SHA256 and encoded as `base64url(claims).base64url(signature)`.
//! Verification is stateless (signature first, then expiry), so a token
//! cannot be revoked before its natural expiry.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;
use thiserror::Error;

/// Length of the HMAC signing secret in bytes
pub const TOKEN_SECRET_LEN: usize = 32;

/// Claims carried by an access token
///
/// `sub` is the account identifier; `iat`/`exp` are Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token verification errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not in `payload.signature` shape, or payload is not valid claims
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Invalid token signature")]
    BadSignature,

    /// `exp` has passed
    #[error("Token has expired")]
    Expired,
}

/// Issue a signed token for `sub`, valid for `ttl` from now.
pub fn issue(sub: &str, ttl: Duration, secret: &[u8; TOKEN_SECRET_LEN]) -> String {
    let now = Utc::now().timestamp();
    let claims = AccessClaims {
        sub: sub.to_string(),
        iat: now,
        exp: now + ttl.as_secs() as i64,
    };

    let payload = serde_json::to_vec(&claims).expect("claims are always serializable");
    let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", payload_b64, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify signature and expiry, returning the claims on success.
pub fn verify(
    token: &str,
    secret: &[u8; TOKEN_SECRET_LEN],
) -> Result<AccessClaims, TokenError> {
    verify_at(token, secret, Utc::now().timestamp())
}

fn verify_at(
    token: &str,
    secret: &[u8; TOKEN_SECRET_LEN],
    now: i64,
) -> Result<AccessClaims, TokenError> {
    let (payload_b64, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

    // Signature before payload parsing: an attacker-controlled payload is
    // never deserialized unless it was signed by us.
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| TokenError::BadSignature)?;

    mac.verify_slice(&signature)
        .map_err(|_| TokenError::BadSignature)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| TokenError::Malformed)?;

    let claims: AccessClaims =
        serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

    if now >= claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}
