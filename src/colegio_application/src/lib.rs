pub mod account_service;
pub mod error;

#[cfg(test)]
mod test_support;

// Re-export for convenience
pub use account_service::{ACTIVATION_EMAIL_SUBJECT, AccountService, DeliveryStatus};
pub use error::{AccountServiceError, ErrorKind};
