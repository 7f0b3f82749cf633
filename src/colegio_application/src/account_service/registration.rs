use chrono::Utc;
use colegio_core::{Account, AccountCandidate, Email, StoreError};

use super::AccountService;
use crate::error::AccountServiceError;

impl AccountService {
    /// Register a new account, storing a hash of the submitted password.
    ///
    /// The presence check and the insert are two separate store calls; the
    /// store's unique constraint on email settles concurrent registrations.
    #[tracing::instrument(name = "AccountService::register_account", skip_all)]
    pub async fn register_account(
        &self,
        candidate: AccountCandidate,
    ) -> Result<Account, AccountServiceError> {
        if self.email_exists(&candidate.email).await? {
            return Err(AccountServiceError::DuplicateEmail);
        }

        let password_hash = self.password_hasher.hash(&candidate.password).await?;
        let account = candidate.into_account(password_hash, Utc::now());

        let account = self.accounts.save(account).await.map_err(|e| match e {
            StoreError::Conflict => AccountServiceError::DuplicateEmail,
            other => other.into(),
        })?;

        tracing::info!(account_id = ?account.id, "Registered account");
        Ok(account)
    }

    #[tracing::instrument(name = "AccountService::email_exists", skip_all)]
    pub async fn email_exists(&self, email: &Email) -> Result<bool, AccountServiceError> {
        Ok(self.accounts.find_by_email(email).await?.is_some())
    }
}
