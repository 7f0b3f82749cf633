use chrono::{DateTime, Utc};
use colegio_core::{
    Account, AccountFilter, AccountId, AccountStore, CollaboratorId, Email, GuardianId,
    PasswordHash, StoreError,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};

use super::map_sqlx_error;

pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    password_hash: String,
    collaborator_id: Option<i64>,
    guardian_id: Option<i64>,
    enabled: bool,
    created_by: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = StoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::new(row.email))
            .map_err(|e| StoreError::UnexpectedError(e.to_string()))?;

        Ok(Account {
            id: Some(AccountId::new(row.id)),
            email,
            password_hash: PasswordHash::new(Secret::new(row.password_hash)),
            collaborator_id: row.collaborator_id.map(CollaboratorId::new),
            guardian_id: row.guardian_id.map(GuardianId::new),
            enabled: row.enabled,
            created_by: row.created_by.map(AccountId::new),
            created_at: row.created_at,
        })
    }
}

const SELECT_ACCOUNT: &str = r#"
    SELECT id, email, password_hash, collaborator_id, guardian_id, enabled, created_by, created_at
    FROM accounts
"#;

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Retrieving account by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{SELECT_ACCOUNT} WHERE email = $1"))
            .bind(email.as_ref().expose_secret())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Retrieving account by id from PostgreSQL", skip(self))]
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{SELECT_ACCOUNT} WHERE id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Saving account to PostgreSQL", skip_all, fields(account_id = ?account.id))]
    async fn save(&self, mut account: Account) -> Result<Account, StoreError> {
        match account.id {
            None => {
                let id: i64 = sqlx::query_scalar(
                    r#"
                        INSERT INTO accounts
                            (email, password_hash, collaborator_id, guardian_id, enabled, created_by, created_at)
                        VALUES ($1, $2, $3, $4, $5, $6, $7)
                        RETURNING id
                    "#,
                )
                .bind(account.email.as_ref().expose_secret())
                .bind(account.password_hash.as_ref().expose_secret())
                .bind(account.collaborator_id.map(CollaboratorId::value))
                .bind(account.guardian_id.map(GuardianId::value))
                .bind(account.enabled)
                .bind(account.created_by.map(AccountId::value))
                .bind(account.created_at)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

                account.id = Some(AccountId::new(id));
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                        UPDATE accounts
                        SET email = $2,
                            password_hash = $3,
                            collaborator_id = $4,
                            guardian_id = $5,
                            enabled = $6
                        WHERE id = $1
                    "#,
                )
                .bind(id.value())
                .bind(account.email.as_ref().expose_secret())
                .bind(account.password_hash.as_ref().expose_secret())
                .bind(account.collaborator_id.map(CollaboratorId::value))
                .bind(account.guardian_id.map(GuardianId::value))
                .bind(account.enabled)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

                if result.rows_affected() == 0 {
                    return Err(StoreError::NotFound);
                }
            }
        }

        Ok(account)
    }

    #[tracing::instrument(name = "Filtering accounts in PostgreSQL", skip(self))]
    async fn find_by_filter(&self, filter: AccountFilter) -> Result<Vec<Account>, StoreError> {
        let condition = match filter {
            AccountFilter::Collaborators => "collaborator_id IS NOT NULL",
            AccountFilter::Guardians => "guardian_id IS NOT NULL",
        };

        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            "{SELECT_ACCOUNT} WHERE {condition} ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Account::try_from).collect()
    }
}
