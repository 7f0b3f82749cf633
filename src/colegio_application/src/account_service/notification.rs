use colegio_core::{Account, ActivationLinks, TokenValue};

use super::AccountService;

pub const ACTIVATION_EMAIL_SUBJECT: &str = "Confirmación Registro";

/// Outcome of an email dispatch.
///
/// Deliberately not a `Result`: a failed email is logged and reported, never
/// propagated into the flow that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Failed(String),
}

impl DeliveryStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

impl AccountService {
    /// Email the activation and resend links for `token` to the account holder.
    #[tracing::instrument(name = "AccountService::send_activation_email", skip_all)]
    pub async fn send_activation_email(
        &self,
        account: &Account,
        token: &TokenValue,
        base_url: &str,
    ) -> DeliveryStatus {
        let links = ActivationLinks::new(base_url, token);

        let html = match self.templates.render_activation(&links) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(error = %e, "Failed to render activation email");
                return DeliveryStatus::Failed(e.to_string());
            }
        };

        match self
            .email_client
            .send_email(&account.email, ACTIVATION_EMAIL_SUBJECT, &html)
            .await
        {
            Ok(()) => DeliveryStatus::Sent,
            Err(e) => {
                tracing::error!(error = %e, account_id = ?account.id, "Failed to send activation email");
                DeliveryStatus::Failed(e.to_string())
            }
        }
    }
}
