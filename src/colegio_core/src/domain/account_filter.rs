use crate::domain::account::Account;

/// The two account listings the school office asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFilter {
    /// Accounts linked to a collaborator (staff) record.
    Collaborators,
    /// Accounts linked to a guardian record.
    Guardians,
}

impl AccountFilter {
    /// `Some(true)` selects collaborators, anything else selects guardians.
    pub fn from_collaborator_flag(is_collaborator: Option<bool>) -> Self {
        match is_collaborator {
            Some(true) => Self::Collaborators,
            Some(false) | None => Self::Guardians,
        }
    }

    pub fn matches(&self, account: &Account) -> bool {
        match self {
            Self::Collaborators => account.is_collaborator(),
            Self::Guardians => account.is_guardian(),
        }
    }
}
