use colegio_adapters::{
    AskamaTemplateRenderer, HashMapAccountStore, HashMapActivationTokenStore,
    HashMapRoleAssignmentStore, MockEmailClient, config::{AUTHENTICATED_USER_HEADER, test},
    email::SentEmail,
};
use colegio_application::AccountService;
use colegio_core::{ActivationTokenStore, Password, PasswordHash, PasswordHasher};
use colegio_service::ColegioService;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;

pub const BASE_URL: &str = "http://colegio.test";

/// Argon2 is too slow for a test suite that registers dozens of accounts.
struct PlainHasher;

#[async_trait::async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(
        &self,
        password: &Password,
    ) -> Result<PasswordHash, colegio_core::HasherError> {
        Ok(PasswordHash::new(Secret::new(format!(
            "plain:{}",
            password.as_ref().expose_secret()
        ))))
    }
}

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub email_client: MockEmailClient,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_activation_tokens(HashMapActivationTokenStore::new()).await
    }

    pub async fn with_activation_tokens<T>(activation_tokens: T) -> Self
    where
        T: ActivationTokenStore + 'static,
    {
        let email_client = MockEmailClient::new();

        let accounts = AccountService::new(
            HashMapAccountStore::new(),
            activation_tokens,
            HashMapRoleAssignmentStore::new(),
            PlainHasher,
            email_client.clone(),
            AskamaTemplateRenderer::new(),
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = ColegioService::new(accounts, BASE_URL);
        tokio::spawn(service.run_standalone(listener));

        Self {
            address,
            http_client: reqwest::Client::new(),
            email_client,
        }
    }

    pub async fn post_register(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/accounts", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register `email` and return the created account body.
    pub async fn register(&self, email: &str) -> Value {
        let response = self
            .post_register(&serde_json::json!({ "email": email, "password": "p" }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
        response.json().await.unwrap()
    }

    pub async fn get_email_exists(&self, email: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/accounts/exists", self.address))
            .query(&[("email", email)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_accounts(&self, collaborator: Option<bool>) -> reqwest::Response {
        let mut request = self.http_client.get(format!("{}/accounts", self.address));
        if let Some(flag) = collaborator {
            request = request.query(&[("collaborator", flag)]);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn put_account(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .put(format!("{}/accounts", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_role(
        &self,
        account_id: i64,
        body: &Value,
        principal: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}/accounts/{}/roles", self.address, account_id))
            .json(body);
        if let Some(principal) = principal {
            request = request.header(AUTHENTICATED_USER_HEADER, principal);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn delete_role(
        &self,
        account_id: i64,
        body: &Value,
        principal: &str,
    ) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/accounts/{}/roles", self.address, account_id))
            .header(AUTHENTICATED_USER_HEADER, principal)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_activate(&self, token: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/activar/{}", self.address, token))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_resend(&self, token: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/reenviarTokenActivacion/{}", self.address, token))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn sent_emails(&self) -> Vec<SentEmail> {
        self.email_client.outbox().await
    }

    /// Token from the activation link of the most recent email to `recipient`.
    pub async fn latest_token_for(&self, recipient: &str) -> String {
        let emails = self.sent_emails().await;
        let email = emails
            .iter()
            .rev()
            .find(|email| email.recipient == recipient)
            .expect("No email sent to recipient");
        token_from_body(&email.html_body)
    }
}

pub fn token_from_body(html_body: &str) -> String {
    let marker = format!("{BASE_URL}/activar/");
    let start = html_body.find(&marker).expect("No activation link in email") + marker.len();
    html_body[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}
