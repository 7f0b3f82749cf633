use chrono::Utc;
use colegio_core::{AccountId, AuthContext, RoleAssignment, StoreError};

use super::AccountService;
use crate::error::AccountServiceError;

impl AccountService {
    /// Grant a role to the account `account_id`.
    ///
    /// The account inside `assignment` must be `account_id` itself. The
    /// assignment is stamped with the caller's account and the current time.
    #[tracing::instrument(
        name = "AccountService::assign_role",
        skip(self, assignment, auth),
        fields(role_id = %assignment.role_id)
    )]
    pub async fn assign_role(
        &self,
        mut assignment: RoleAssignment,
        account_id: AccountId,
        auth: &AuthContext,
    ) -> Result<RoleAssignment, AccountServiceError> {
        if assignment.account_id != account_id {
            return Err(AccountServiceError::AccountIdMismatch {
                expected: account_id,
                found: assignment.account_id,
            });
        }

        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or(AccountServiceError::AccountNotFound(account_id))?;

        let actor = self.current_authenticated_account(auth).await?;
        let actor_id = actor.id.ok_or(AccountServiceError::UnknownPrincipal)?;

        assignment.stamp(actor_id, Utc::now());

        Ok(self.role_assignments.save(assignment).await?)
    }

    /// Delete the assignment identified by its own id.
    ///
    /// `account_id` is not checked against the assignment.
    #[tracing::instrument(name = "AccountService::remove_role", skip(self, assignment))]
    pub async fn remove_role(
        &self,
        assignment: &RoleAssignment,
        account_id: AccountId,
    ) -> Result<(), AccountServiceError> {
        let id = assignment
            .id
            .ok_or(AccountServiceError::RoleAssignmentNotFound)?;

        self.role_assignments
            .delete_by_id(id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => AccountServiceError::RoleAssignmentNotFound,
                other => other.into(),
            })
    }
}
