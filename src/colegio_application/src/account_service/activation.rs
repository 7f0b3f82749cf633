use colegio_core::{Account, ActivationToken, TokenValue};

use super::AccountService;
use crate::error::AccountServiceError;

impl AccountService {
    /// Bind `token` to `account` and persist it.
    ///
    /// Token values are not checked for uniqueness; callers pass a random one.
    #[tracing::instrument(name = "AccountService::issue_activation_token", skip_all)]
    pub async fn issue_activation_token(
        &self,
        account: &Account,
        token: TokenValue,
    ) -> Result<ActivationToken, AccountServiceError> {
        let account_id = account.id.ok_or(AccountServiceError::MissingAccountId)?;

        let token = self
            .activation_tokens
            .save(ActivationToken::new(account_id, token))
            .await?;

        Ok(token)
    }

    #[tracing::instrument(name = "AccountService::lookup_activation_token", skip_all)]
    pub async fn lookup_activation_token(
        &self,
        token: &TokenValue,
    ) -> Result<ActivationToken, AccountServiceError> {
        self.activation_tokens
            .find_by_token(token)
            .await?
            .ok_or(AccountServiceError::TokenNotFound)
    }

    /// Replace the value of an existing token with a fresh random one.
    ///
    /// The old value stops resolving once this returns.
    #[tracing::instrument(name = "AccountService::reissue_activation_token", skip_all)]
    pub async fn reissue_activation_token(
        &self,
        token: &TokenValue,
    ) -> Result<ActivationToken, AccountServiceError> {
        let mut record = self.lookup_activation_token(token).await?;
        record.renew(TokenValue::generate());

        Ok(self.activation_tokens.save(record).await?)
    }

    #[tracing::instrument(name = "AccountService::account_for_token", skip_all)]
    pub async fn account_for_token(
        &self,
        token: &TokenValue,
    ) -> Result<Account, AccountServiceError> {
        let record = self.lookup_activation_token(token).await?;

        self.accounts
            .find_by_id(record.account_id)
            .await?
            .ok_or(AccountServiceError::AccountNotFound(record.account_id))
    }

    /// Enable the account owning `token`.
    #[tracing::instrument(name = "AccountService::activate_account", skip_all)]
    pub async fn activate_account(
        &self,
        token: &TokenValue,
    ) -> Result<Account, AccountServiceError> {
        let mut account = self.account_for_token(token).await?;
        if account.enabled {
            return Ok(account);
        }

        account.enabled = true;
        let account = self.accounts.save(account).await?;

        tracing::info!(account_id = ?account.id, "Activated account");
        Ok(account)
    }
}
