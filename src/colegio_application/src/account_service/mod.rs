//! Account lifecycle: registration, activation tokens, role assignment,
//! updates and listings.
//!
//! Every operation runs to completion inside the calling request: read,
//! validate, write. The service holds no state of its own besides the ports
//! it talks to.

mod accounts;
mod activation;
mod notification;
mod registration;
mod roles;

use std::sync::Arc;

use colegio_core::{
    AccountStore, ActivationTokenStore, EmailClient, PasswordHasher, RoleAssignmentStore,
    TemplateRenderer,
};

pub use notification::{ACTIVATION_EMAIL_SUBJECT, DeliveryStatus};

/// Orchestrates the account stores, the password hasher and the mailer.
#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
    activation_tokens: Arc<dyn ActivationTokenStore>,
    role_assignments: Arc<dyn RoleAssignmentStore>,
    password_hasher: Arc<dyn PasswordHasher>,
    email_client: Arc<dyn EmailClient>,
    templates: Arc<dyn TemplateRenderer>,
}

impl AccountService {
    pub fn new<A, T, R, H, E, M>(
        accounts: A,
        activation_tokens: T,
        role_assignments: R,
        password_hasher: H,
        email_client: E,
        templates: M,
    ) -> Self
    where
        A: AccountStore + 'static,
        T: ActivationTokenStore + 'static,
        R: RoleAssignmentStore + 'static,
        H: PasswordHasher + 'static,
        E: EmailClient + 'static,
        M: TemplateRenderer + 'static,
    {
        Self {
            accounts: Arc::new(accounts),
            activation_tokens: Arc::new(activation_tokens),
            role_assignments: Arc::new(role_assignments),
            password_hasher: Arc::new(password_hasher),
            email_client: Arc::new(email_client),
            templates: Arc::new(templates),
        }
    }
}
