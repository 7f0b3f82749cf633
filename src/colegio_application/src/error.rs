use colegio_core::{AccountId, HasherError, StoreError};

/// Broad class of an [`AccountServiceError`], used by callers to decide how
/// to answer the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced record does not exist.
    NotFound,
    /// A business rule rejected the request; the caller can correct it.
    Validation,
    /// Broken invariant or infrastructure failure.
    Fatal,
}

/// Error types for the account service
#[derive(Debug, thiserror::Error)]
pub enum AccountServiceError {
    #[error("An account with this email already exists")]
    DuplicateEmail,
    #[error("An account id must be supplied")]
    MissingAccountId,
    #[error("No account exists with id {0}")]
    AccountNotFound(AccountId),
    #[error("Activation token not found")]
    TokenNotFound,
    #[error("Role assignment not found")]
    RoleAssignmentNotFound,
    #[error("Account ids do not match: expected {expected}, payload has {found}")]
    AccountIdMismatch { expected: AccountId, found: AccountId },
    #[error("The account email cannot be changed")]
    EmailChangeNotAllowed,
    #[error("Authenticated principal has no matching account")]
    UnknownPrincipal,
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
    #[error("Hasher error: {0}")]
    HasherError(#[from] HasherError),
}

impl AccountServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingAccountId
            | Self::AccountNotFound(_)
            | Self::TokenNotFound
            | Self::RoleAssignmentNotFound => ErrorKind::NotFound,
            Self::DuplicateEmail | Self::AccountIdMismatch { .. } | Self::EmailChangeNotAllowed => {
                ErrorKind::Validation
            }
            Self::UnknownPrincipal | Self::StoreError(_) | Self::HasherError(_) => ErrorKind::Fatal,
        }
    }
}
