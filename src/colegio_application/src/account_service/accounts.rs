use colegio_core::{Account, AccountFilter, AccountUpdate, AuthContext, Email, StoreError};

use super::AccountService;
use crate::error::AccountServiceError;

impl AccountService {
    /// Persist new values for an existing account.
    ///
    /// Rejected whenever the submitted email equals the stored one, even if
    /// other fields differ.
    #[tracing::instrument(name = "AccountService::update_account", skip_all, fields(account_id = ?update.id))]
    pub async fn update_account(
        &self,
        update: AccountUpdate,
    ) -> Result<Account, AccountServiceError> {
        let id = update.id.ok_or(AccountServiceError::MissingAccountId)?;

        let stored = self
            .accounts
            .find_by_id(id)
            .await?
            .ok_or(AccountServiceError::AccountNotFound(id))?;

        if stored.email == update.email {
            return Err(AccountServiceError::EmailChangeNotAllowed);
        }

        self.accounts
            .save(stored.apply_update(update))
            .await
            .map_err(|e| match e {
                StoreError::Conflict => AccountServiceError::DuplicateEmail,
                other => other.into(),
            })
    }

    /// Collaborator accounts for `Some(true)`, guardian accounts otherwise.
    ///
    /// Order is whatever the store returns.
    #[tracing::instrument(name = "AccountService::find_accounts_by_filter", skip(self))]
    pub async fn find_accounts_by_filter(
        &self,
        is_collaborator: Option<bool>,
    ) -> Result<Vec<Account>, AccountServiceError> {
        let filter = AccountFilter::from_collaborator_flag(is_collaborator);
        Ok(self.accounts.find_by_filter(filter).await?)
    }

    /// The account of the authenticated caller.
    ///
    /// An authenticated principal without an account breaks an invariant of
    /// the system; it is reported as [`AccountServiceError::UnknownPrincipal`].
    #[tracing::instrument(name = "AccountService::current_authenticated_account", skip_all)]
    pub async fn current_authenticated_account(
        &self,
        auth: &AuthContext,
    ) -> Result<Account, AccountServiceError> {
        let Ok(email) = Email::parse(auth.principal_name()) else {
            tracing::error!("Authenticated principal is not an email address");
            return Err(AccountServiceError::UnknownPrincipal);
        };

        match self.accounts.find_by_email(&email).await? {
            Some(account) => Ok(account),
            None => {
                tracing::error!("Authenticated principal has no account");
                Err(AccountServiceError::UnknownPrincipal)
            }
        }
    }
}
