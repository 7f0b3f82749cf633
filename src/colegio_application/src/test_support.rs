// In-memory ports shared by the service tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use colegio_core::{
    Account, AccountCandidate, AccountFilter, AccountId, AccountStore, ActivationLinks,
    ActivationToken, ActivationTokenId, ActivationTokenStore, Email, EmailClient, EmailError,
    HasherError, Password, PasswordHash, PasswordHasher, RoleAssignment, RoleAssignmentId,
    RoleAssignmentStore, StoreError, TemplateError, TemplateRenderer, TokenValue,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

use crate::AccountService;

pub fn email(address: &str) -> Email {
    Email::parse(address).unwrap()
}

pub fn candidate(address: &str) -> AccountCandidate {
    AccountCandidate::new(
        email(address),
        Password::try_from(Secret::new("p".to_string())).unwrap(),
    )
}

#[derive(Default, Clone)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
    last_id: Arc<AtomicI64>,
}

impl MockAccountStore {
    pub async fn get(&self, id: AccountId) -> Option<Account> {
        self.accounts.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| &a.email == email).cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn save(&self, mut account: Account) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;
        match account.id {
            None => {
                if accounts.values().any(|a| a.email == account.email) {
                    return Err(StoreError::Conflict);
                }
                let id = AccountId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
                account.id = Some(id);
                accounts.insert(id, account.clone());
            }
            Some(id) => {
                if accounts
                    .values()
                    .any(|a| a.id != Some(id) && a.email == account.email)
                {
                    return Err(StoreError::Conflict);
                }
                let stored = accounts.get_mut(&id).ok_or(StoreError::NotFound)?;
                *stored = account.clone();
            }
        }
        Ok(account)
    }

    async fn find_by_filter(&self, filter: AccountFilter) -> Result<Vec<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub struct MockActivationTokenStore {
    tokens: Arc<RwLock<HashMap<ActivationTokenId, ActivationToken>>>,
    last_id: Arc<AtomicI64>,
}

impl MockActivationTokenStore {
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[async_trait]
impl ActivationTokenStore for MockActivationTokenStore {
    async fn find_by_token(
        &self,
        token: &TokenValue,
    ) -> Result<Option<ActivationToken>, StoreError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.values().find(|t| &t.token == token).cloned())
    }

    async fn save(&self, mut token: ActivationToken) -> Result<ActivationToken, StoreError> {
        let mut tokens = self.tokens.write().await;
        let id = match token.id {
            Some(id) => id,
            None => ActivationTokenId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1),
        };
        token.id = Some(id);
        tokens.insert(id, token.clone());
        Ok(token)
    }
}

#[derive(Default, Clone)]
pub struct MockRoleAssignmentStore {
    assignments: Arc<RwLock<HashMap<RoleAssignmentId, RoleAssignment>>>,
    last_id: Arc<AtomicI64>,
}

impl MockRoleAssignmentStore {
    pub async fn all(&self) -> Vec<RoleAssignment> {
        self.assignments.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl RoleAssignmentStore for MockRoleAssignmentStore {
    async fn save(&self, mut assignment: RoleAssignment) -> Result<RoleAssignment, StoreError> {
        let mut assignments = self.assignments.write().await;
        let id = match assignment.id {
            Some(id) => id,
            None => RoleAssignmentId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1),
        };
        assignment.id = Some(id);
        assignments.insert(id, assignment.clone());
        Ok(assignment)
    }

    async fn delete_by_id(&self, id: RoleAssignmentId) -> Result<(), StoreError> {
        let mut assignments = self.assignments.write().await;
        assignments.remove(&id).ok_or(StoreError::NotFound)?;
        Ok(())
    }
}

pub struct PrefixHasher;

#[async_trait]
impl PasswordHasher for PrefixHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HasherError> {
        Ok(PasswordHash::new(Secret::new(format!(
            "hashed:{}",
            password.as_ref().expose_secret()
        ))))
    }
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Default, Clone)]
pub struct RecordingEmailClient {
    sent: Arc<RwLock<Vec<SentEmail>>>,
    fail: bool,
}

impl RecordingEmailClient {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::Transport("connection refused".to_string()));
        }
        self.sent.write().await.push(SentEmail {
            recipient: recipient.as_ref().expose_secret().clone(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }
}

pub struct PlainTemplates;

impl TemplateRenderer for PlainTemplates {
    fn render_activation(&self, links: &ActivationLinks) -> Result<String, TemplateError> {
        Ok(format!(
            "<a href=\"{}\">activar</a> <a href=\"{}\">reenviar</a>",
            links.activate_url, links.resend_url
        ))
    }
}

pub struct TestHarness {
    pub service: AccountService,
    pub accounts: MockAccountStore,
    pub tokens: MockActivationTokenStore,
    pub roles: MockRoleAssignmentStore,
    pub emails: RecordingEmailClient,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_email_client(RecordingEmailClient::default())
    }

    pub fn with_email_client(emails: RecordingEmailClient) -> Self {
        let accounts = MockAccountStore::default();
        let tokens = MockActivationTokenStore::default();
        let roles = MockRoleAssignmentStore::default();

        let service = AccountService::new(
            accounts.clone(),
            tokens.clone(),
            roles.clone(),
            PrefixHasher,
            emails.clone(),
            PlainTemplates,
        );

        Self {
            service,
            accounts,
            tokens,
            roles,
            emails,
        }
    }

    /// Register an account and return it with its assigned id.
    pub async fn registered(&self, address: &str) -> Account {
        self.service
            .register_account(candidate(address))
            .await
            .unwrap()
    }
}
