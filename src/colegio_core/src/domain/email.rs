use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailParseError {
    #[error("Email must not be empty")]
    Empty,
    #[error("Invalid email address")]
    Invalid,
}

/// A syntactically valid email address.
///
/// The address is kept behind a [`Secret`] so it never shows up in logs or
/// `Debug` output by accident.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(candidate: &str) -> Result<Self, EmailParseError> {
        Self::try_from(Secret::new(candidate.to_string()))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailParseError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let trimmed = value.expose_secret().trim();

        if trimmed.is_empty() {
            return Err(EmailParseError::Empty);
        }
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(EmailParseError::Invalid);
        }

        Ok(Self(Secret::new(trimmed.to_string())))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
