use chrono::{DateTime, Utc};

use crate::domain::ids::{AccountId, RoleAssignmentId, RoleId};

/// Grants `role_id` to `account_id`, with creation audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub id: Option<RoleAssignmentId>,
    pub account_id: AccountId,
    pub role_id: RoleId,
    pub created_by: Option<AccountId>,
    pub created_at: Option<DateTime<Utc>>,
}

impl RoleAssignment {
    pub fn new(account_id: AccountId, role_id: RoleId) -> Self {
        Self {
            id: None,
            account_id,
            role_id,
            created_by: None,
            created_at: None,
        }
    }

    pub fn stamp(&mut self, actor: AccountId, at: DateTime<Utc>) {
        self.created_by = Some(actor);
        self.created_at = Some(at);
    }
}
