pub mod hashmap_account_store;
pub mod hashmap_activation_token_store;
pub mod hashmap_role_assignment_store;
pub mod postgres_account_store;
pub mod postgres_activation_token_store;
pub mod postgres_role_assignment_store;

pub use hashmap_account_store::HashMapAccountStore;
pub use hashmap_activation_token_store::HashMapActivationTokenStore;
pub use hashmap_role_assignment_store::HashMapRoleAssignmentStore;
pub use postgres_account_store::PostgresAccountStore;
pub use postgres_activation_token_store::PostgresActivationTokenStore;
pub use postgres_role_assignment_store::PostgresRoleAssignmentStore;

use colegio_core::StoreError;
use sqlx::PgPool;
use sqlx::migrate::MigrateError;

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

// Unique violations become conflicts, anything else is unexpected.
fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return StoreError::Conflict;
        }
    }
    StoreError::UnexpectedError(e.to_string())
}
