//! Login Use Case
//!
//! Authenticates credentials and issues a signed, time-limited access token.

use std::sync::Arc;

use platform::mailer::Notifier;
use platform::token;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token, 1-hour lifetime
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R, N>
where
    R: AccountRepository,
    N: Notifier,
{
    account_repo: Arc<R>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<R, N> LoginUseCase<R, N>
where
    R: AccountRepository,
    N: Notifier,
{
    pub fn new(account_repo: Arc<R>, notifier: Arc<N>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            notifier,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        };

        // Any parse failure reads as bad credentials to the caller
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;

        let Some(account) = self.account_repo.find_by_email(&email).await? else {
            // Same wire message as a wrong password; only the log differs
            tracing::debug!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        let password = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        if !account
            .password_hash
            .verify(&password, self.config.pepper())
        {
            tracing::debug!(account_id = %account.account_id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        // Login mail is best-effort; a mail outage must not lock users out.
        if let Err(e) = self
            .notifier
            .send(
                account.email.as_str(),
                "Login Successful",
                "You have successfully logged into your account!",
            )
            .await
        {
            tracing::warn!(
                account_id = %account.account_id,
                error = %e,
                "Failed to send login notification"
            );
        }

        let token = token::issue(
            &account.account_id.to_string(),
            self.config.token_ttl,
            &self.config.token_secret,
        );

        tracing::info!(account_id = %account.account_id, "Account signed in");

        Ok(LoginOutput { token })
    }
}
