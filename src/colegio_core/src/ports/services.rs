use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    activation_links::ActivationLinks,
    email::Email,
    password::{Password, PasswordHash},
};

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct HasherError(pub String);

/// Port trait for the one-way password transform
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HasherError>;
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Invalid email request: {0}")]
    InvalidRequest(String),
    #[error("Email transport failed: {0}")]
    Transport(String),
}

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailError>;
}

#[derive(Debug, Error)]
#[error("Template rendering failed: {0}")]
pub struct TemplateError(pub String);

/// Port trait for the HTML templates sent by email
pub trait TemplateRenderer: Send + Sync {
    fn render_activation(&self, links: &ActivationLinks) -> Result<String, TemplateError>;
}
