//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use platform::mailer::{Notifier, SmtpMailer};

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository and SMTP notifier
pub fn auth_router(repo: PgAccountRepository, mailer: SmtpMailer, config: AuthConfig) -> Router {
    auth_router_generic(repo, mailer, config)
}

/// Create a generic Auth router for any repository/notifier implementation
pub fn auth_router_generic<R, N>(repo: R, notifier: N, config: AuthConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R, N>))
        .route("/login", post(handlers::login::<R, N>))
        .with_state(state)
}
