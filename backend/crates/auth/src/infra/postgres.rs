//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{AccountPassword, Email, UserName};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL unique-violation error code
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                user_name,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.user_name.as_str())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // A concurrent registration lost the race against the unique
            // indexes; report it the same way as the pre-check would have.
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                Err(AuthError::AccountExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                user_name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE user_name = $1 OR email = $2)",
        )
        .bind(user_name.as_str())
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    user_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            user_name: UserName::from_db(self.user_name),
            email: Email::from_db(self.email),
            password_hash: AccountPassword::from_phc_string(self.password_hash)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
