//! JSON bodies and query strings of the HTTP routes.

use chrono::{DateTime, Utc};
use colegio_core::{
    Account, AccountCandidate, AccountId, AccountUpdate, CollaboratorId, Email, GuardianId,
    Password, RoleAssignment, RoleAssignmentId, RoleId,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RegisterAccountRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    #[serde(default)]
    pub collaborator_id: Option<CollaboratorId>,
    #[serde(default)]
    pub guardian_id: Option<GuardianId>,
}

impl TryFrom<RegisterAccountRequest> for AccountCandidate {
    type Error = ApiError;

    fn try_from(request: RegisterAccountRequest) -> Result<Self, Self::Error> {
        Ok(AccountCandidate {
            email: Email::try_from(request.email)?,
            password: Password::try_from(request.password)?,
            collaborator_id: request.collaborator_id,
            guardian_id: request.guardian_id,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub id: Option<AccountId>,
    pub email: Secret<String>,
    #[serde(default)]
    pub collaborator_id: Option<CollaboratorId>,
    #[serde(default)]
    pub guardian_id: Option<GuardianId>,
}

impl TryFrom<UpdateAccountRequest> for AccountUpdate {
    type Error = ApiError;

    fn try_from(request: UpdateAccountRequest) -> Result<Self, Self::Error> {
        Ok(AccountUpdate {
            id: request.id,
            email: Email::try_from(request.email)?,
            collaborator_id: request.collaborator_id,
            guardian_id: request.guardian_id,
        })
    }
}

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Option<AccountId>,
    pub email: String,
    pub collaborator_id: Option<CollaboratorId>,
    pub guardian_id: Option<GuardianId>,
    pub enabled: bool,
    pub created_by: Option<AccountId>,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.as_ref().expose_secret().clone(),
            collaborator_id: account.collaborator_id,
            guardian_id: account.guardian_id,
            enabled: account.enabled,
            created_by: account.created_by,
            created_at: account.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoleAssignmentBody {
    #[serde(default)]
    pub id: Option<RoleAssignmentId>,
    pub account_id: AccountId,
    pub role_id: RoleId,
    #[serde(default)]
    pub created_by: Option<AccountId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<RoleAssignmentBody> for RoleAssignment {
    // Audit fields are never taken from the client.
    fn from(body: RoleAssignmentBody) -> Self {
        let mut assignment = RoleAssignment::new(body.account_id, body.role_id);
        assignment.id = body.id;
        assignment
    }
}

impl From<RoleAssignment> for RoleAssignmentBody {
    fn from(assignment: RoleAssignment) -> Self {
        Self {
            id: assignment.id,
            account_id: assignment.account_id,
            role_id: assignment.role_id,
            created_by: assignment.created_by,
            created_at: assignment.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailExistsQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmailExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Deserialize)]
pub struct AccountFilterQuery {
    pub collaborator: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
