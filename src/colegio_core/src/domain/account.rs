use chrono::{DateTime, Utc};

use crate::domain::{
    email::Email,
    ids::{AccountId, CollaboratorId, GuardianId},
    password::{Password, PasswordHash},
};

/// A user account of the school system.
///
/// `id` is `None` until the account has been saved once; the store assigns it.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Option<AccountId>,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub collaborator_id: Option<CollaboratorId>,
    pub guardian_id: Option<GuardianId>,
    pub enabled: bool,
    pub created_by: Option<AccountId>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_collaborator(&self) -> bool {
        self.collaborator_id.is_some()
    }

    pub fn is_guardian(&self) -> bool {
        self.guardian_id.is_some()
    }

    /// Overwrite the editable fields with the ones from `update`.
    ///
    /// Credentials, the enabled flag and the audit fields stay as stored.
    pub fn apply_update(mut self, update: AccountUpdate) -> Self {
        self.email = update.email;
        self.collaborator_id = update.collaborator_id;
        self.guardian_id = update.guardian_id;
        self
    }
}

/// Registration payload. The password is still in plaintext here.
#[derive(Debug, Clone)]
pub struct AccountCandidate {
    pub email: Email,
    pub password: Password,
    pub collaborator_id: Option<CollaboratorId>,
    pub guardian_id: Option<GuardianId>,
}

impl AccountCandidate {
    pub fn new(email: Email, password: Password) -> Self {
        Self {
            email,
            password,
            collaborator_id: None,
            guardian_id: None,
        }
    }

    pub fn with_collaborator(mut self, collaborator_id: CollaboratorId) -> Self {
        self.collaborator_id = Some(collaborator_id);
        self
    }

    pub fn with_guardian(mut self, guardian_id: GuardianId) -> Self {
        self.guardian_id = Some(guardian_id);
        self
    }

    /// Turn the candidate into a not-yet-persisted, disabled account.
    pub fn into_account(self, password_hash: PasswordHash, created_at: DateTime<Utc>) -> Account {
        Account {
            id: None,
            email: self.email,
            password_hash,
            collaborator_id: self.collaborator_id,
            guardian_id: self.guardian_id,
            enabled: false,
            created_by: None,
            created_at,
        }
    }
}

/// Editable fields of an existing account.
#[derive(Debug, Clone)]
pub struct AccountUpdate {
    pub id: Option<AccountId>,
    pub email: Email,
    pub collaborator_id: Option<CollaboratorId>,
    pub guardian_id: Option<GuardianId>,
}
