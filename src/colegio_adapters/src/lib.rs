pub mod config;
pub mod email;
pub mod hashing;
pub mod persistence;
pub mod templates;

pub use email::{MockEmailClient, PostmarkEmailClient};
pub use hashing::Argon2PasswordHasher;
pub use persistence::{
    HashMapAccountStore, HashMapActivationTokenStore, HashMapRoleAssignmentStore,
    PostgresAccountStore, PostgresActivationTokenStore, PostgresRoleAssignmentStore,
};
pub use templates::AskamaTemplateRenderer;
