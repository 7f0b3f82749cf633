use crate::domain::activation_token::TokenValue;

const ACTIVATE_PATH: &str = "activar";
const RESEND_PATH: &str = "reenviarTokenActivacion";

/// The two links embedded in the activation email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationLinks {
    pub activate_url: String,
    pub resend_url: String,
}

impl ActivationLinks {
    /// `base_url` is used verbatim as the prefix of both links.
    pub fn new(base_url: &str, token: &TokenValue) -> Self {
        Self {
            activate_url: format!("{base_url}/{ACTIVATE_PATH}/{token}"),
            resend_url: format!("{base_url}/{RESEND_PATH}/{token}"),
        }
    }
}
