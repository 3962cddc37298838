//! Register Use Case
//!
//! Creates a new account: validate, hash, persist, best-effort welcome mail.

use std::sync::Arc;

use kernel::id::AccountId;
use platform::mailer::Notifier;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{AccountPassword, Email, RawPassword, UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub account_id: AccountId,
}

/// Register use case
pub struct RegisterUseCase<R, N>
where
    R: AccountRepository,
    N: Notifier,
{
    account_repo: Arc<R>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<R, N> RegisterUseCase<R, N>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let (Some(user_name), Some(email), Some(password)) =
            (input.user_name, input.email, input.password)
        else {
            return Err(AuthError::Validation(
                "All fields (username, email, password) are required".to_string(),
            ));
        };

        // Validate everything before touching the store
        let user_name = UserName::new(user_name)?;
        let email = Email::new(email)?;
        let password = RawPassword::new(password)?;

        // Pre-check gives the friendly error; the store's unique indexes
        // stay authoritative under concurrent registration.
        if self
            .account_repo
            .exists_by_user_name_or_email(&user_name, &email)
            .await?
        {
            return Err(AuthError::AccountExists);
        }

        let password_hash = AccountPassword::from_raw(&password, self.config.pepper())?;

        let account = Account::new(user_name, email, password_hash);

        self.account_repo.create(&account).await?;

        // Welcome mail is best-effort: the account is committed either way.
        if let Err(e) = self
            .notifier
            .send(
                account.email.as_str(),
                "Welcome!",
                "Thanks for registering with our app!",
            )
            .await
        {
            tracing::warn!(
                account_id = %account.account_id,
                error = %e,
                "Failed to send welcome email"
            );
        }

        tracing::info!(
            account_id = %account.account_id,
            user_name = %account.user_name,
            "Account registered"
        );

        Ok(RegisterOutput {
            account_id: account.account_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{InMemoryAccounts, RecordingNotifier};

    fn use_case(
        repo: Arc<InMemoryAccounts>,
        notifier: Arc<RecordingNotifier>,
    ) -> RegisterUseCase<InMemoryAccounts, RecordingNotifier> {
        RegisterUseCase::new(repo, notifier, Arc::new(AuthConfig::default()))
    }

    fn input(user_name: &str, email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            user_name: Some(user_name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_succeeds_and_sends_welcome() {
        let repo = Arc::new(InMemoryAccounts::default());
        let notifier = Arc::new(RecordingNotifier::default());

        let output = use_case(repo.clone(), notifier.clone())
            .execute(input("alice", "alice@x.com", "Strong1!"))
            .await
            .unwrap();

        assert_eq!(repo.count(), 1);
        assert_eq!(notifier.sent_subjects(), vec!["Welcome!"]);
        assert_eq!(output.account_id.as_uuid().get_version_num(), 4);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let repo = Arc::new(InMemoryAccounts::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = use_case(repo.clone(), notifier);

        use_case
            .execute(input("alice", "alice@x.com", "Strong1!"))
            .await
            .unwrap();

        let err = use_case
            .execute(input("alice2", "alice@x.com", "Strong1!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::AccountExists));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_user_name() {
        let repo = Arc::new(InMemoryAccounts::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = use_case(repo.clone(), notifier);

        use_case
            .execute(input("alice", "alice@x.com", "Strong1!"))
            .await
            .unwrap();

        let err = use_case
            .execute(input("alice", "other@x.com", "Strong1!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::AccountExists));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_register_rejects_weak_password() {
        let repo = Arc::new(InMemoryAccounts::default());
        let notifier = Arc::new(RecordingNotifier::default());

        let err = use_case(repo.clone(), notifier)
            .execute(input("alice", "alice@x.com", "short1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_register_rejects_missing_fields() {
        let repo = Arc::new(InMemoryAccounts::default());
        let notifier = Arc::new(RecordingNotifier::default());

        let err = use_case(repo.clone(), notifier)
            .execute(RegisterInput {
                user_name: Some("alice".to_string()),
                email: None,
                password: Some("Strong1!".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_register_succeeds_when_mail_fails() {
        let repo = Arc::new(InMemoryAccounts::default());
        let notifier = Arc::new(RecordingNotifier::failing());

        let result = use_case(repo.clone(), notifier)
            .execute(input("alice", "alice@x.com", "Strong1!"))
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.count(), 1);
    }
}
