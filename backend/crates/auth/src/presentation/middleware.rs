//! Access Guard Middleware
//!
//! Verifies the bearer token on every protected request and binds the
//! caller's account id to the request context. Verification is stateless
//! (signature + expiry only), so a token stays valid until its natural
//! expiry.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::AccountId;
use platform::token;

use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// The authenticated caller, inserted into request extensions
#[derive(Debug, Clone, Copy)]
pub struct CurrentAccount {
    pub account_id: AccountId,
}

/// Middleware that requires a valid bearer token
///
/// Use with `axum::middleware::from_fn_with_state(Arc<AuthConfig>, ..)`
/// on every route that operates on owned resources.
pub async fn require_account(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) = bearer_token(req.headers()) else {
        return Err(AuthError::TokenRequired.into_response());
    };

    let claims = match token::verify(token, &config.token_secret) {
        Ok(claims) => claims,
        Err(e) => {
            // Expired, malformed and forged tokens all get the same
            // response; the log keeps the distinction.
            tracing::debug!(error = %e, "Rejected bearer token");
            return Err(AuthError::TokenInvalid.into_response());
        }
    };

    let account_id = match claims.sub.parse::<Uuid>() {
        Ok(uuid) => AccountId::from_uuid(uuid),
        Err(_) => return Err(AuthError::TokenInvalid.into_response()),
    };

    req.extensions_mut().insert(CurrentAccount { account_id });

    Ok(next.run(req).await)
}

/// Extract the token from `Authorization: Bearer <token>`
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
