//! Test doubles for the application layer

use std::sync::Mutex;

use platform::mailer::{MailerError, Notifier};

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{Email, UserName};
use crate::error::{AuthError, AuthResult};

/// In-memory account store mirroring the database unique indexes
#[derive(Default)]
pub struct InMemoryAccounts {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccounts {
    pub fn count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

impl AccountRepository for InMemoryAccounts {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.lock().unwrap();

        let taken = accounts
            .iter()
            .any(|a| a.user_name == account.user_name || a.email == account.email);
        if taken {
            return Err(AuthError::AccountExists);
        }

        accounts.push(account.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.email == email)
            .cloned())
    }

    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<bool> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .any(|a| &a.user_name == user_name || &a.email == email))
    }
}

/// Recording notifier; with `fail` set, every send errors
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent_subjects(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, subject)| subject.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<(), MailerError> {
        if self.fail {
            let err = "missing-at-sign"
                .parse::<platform::lettre::Address>()
                .unwrap_err();
            return Err(err.into());
        }

        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}
