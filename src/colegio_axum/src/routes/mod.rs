//! Route handlers.
//!
//! Handlers extract their input with axum's extractors, convert it into
//! domain types and delegate to `AccountService`.

pub mod accounts;
pub mod activation;
pub mod register;
pub mod roles;

pub use accounts::{email_exists, list_accounts, update_account};
pub use activation::{activate, resend_activation};
pub use register::register;
pub use roles::{assign_role, remove_role};
