use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::Account,
    account_filter::AccountFilter,
    activation_token::{ActivationToken, TokenValue},
    email::Email,
    ids::{AccountId, RoleAssignmentId},
    role_assignment::RoleAssignment,
};

// Shared by every store port
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,
    #[error("Record conflicts with an existing one")]
    Conflict,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NotFound, Self::NotFound)
                | (Self::Conflict, Self::Conflict)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Accounts, keyed by id and unique by email.
///
/// `save` inserts when the account has no id (assigning one) and replaces the
/// stored record otherwise. Inserting an email that is already taken is a
/// [`StoreError::Conflict`]; replacing an id that does not exist is
/// [`StoreError::NotFound`].
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, StoreError>;
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError>;
    async fn save(&self, account: Account) -> Result<Account, StoreError>;
    async fn find_by_filter(&self, filter: AccountFilter) -> Result<Vec<Account>, StoreError>;
}

/// Activation tokens. Same insert-or-replace contract for `save` as
/// [`AccountStore`].
#[async_trait]
pub trait ActivationTokenStore: Send + Sync {
    async fn find_by_token(&self, token: &TokenValue)
    -> Result<Option<ActivationToken>, StoreError>;
    async fn save(&self, token: ActivationToken) -> Result<ActivationToken, StoreError>;
}

#[async_trait]
pub trait RoleAssignmentStore: Send + Sync {
    async fn save(&self, assignment: RoleAssignment) -> Result<RoleAssignment, StoreError>;
    async fn delete_by_id(&self, id: RoleAssignmentId) -> Result<(), StoreError>;
}
