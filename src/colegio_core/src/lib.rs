pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountCandidate, AccountUpdate},
    account_filter::AccountFilter,
    activation_links::ActivationLinks,
    activation_token::{ActivationToken, TokenValue},
    auth_context::AuthContext,
    email::{Email, EmailParseError},
    ids::{AccountId, ActivationTokenId, CollaboratorId, GuardianId, RoleAssignmentId, RoleId},
    password::{Password, PasswordError, PasswordHash},
    role_assignment::RoleAssignment,
};

pub use ports::{
    repositories::{AccountStore, ActivationTokenStore, RoleAssignmentStore, StoreError},
    services::{
        EmailClient, EmailError, HasherError, PasswordHasher, TemplateError, TemplateRenderer,
    },
};
