use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::ids::{AccountId, ActivationTokenId};

/// Opaque token value sent to the account holder by email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenValue(String);

impl TokenValue {
    /// A fresh random value (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pending activation of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationToken {
    pub id: Option<ActivationTokenId>,
    pub token: TokenValue,
    pub account_id: AccountId,
    pub issued_at: DateTime<Utc>,
}

impl ActivationToken {
    pub fn new(account_id: AccountId, token: TokenValue) -> Self {
        Self {
            id: None,
            token,
            account_id,
            issued_at: Utc::now(),
        }
    }

    /// Swap in a new token value; the record itself is kept.
    pub fn renew(&mut self, token: TokenValue) {
        self.token = token;
        self.issued_at = Utc::now();
    }
}
