use std::sync::Arc;
use tokio::sync::RwLock;

use colegio_core::{Email, EmailClient, EmailError};
use secrecy::ExposeSecret;

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
}

/// Keeps sent emails in memory instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient {
    outbox: Arc<RwLock<Vec<SentEmail>>>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn outbox(&self) -> Vec<SentEmail> {
        self.outbox.read().await.clone()
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        tracing::debug!(subject, "Recording email instead of sending it");
        self.outbox.write().await.push(SentEmail {
            recipient: recipient.as_ref().expose_secret().clone(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }
}
