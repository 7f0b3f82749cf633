use colegio_core::{AccountId, RoleAssignment, RoleAssignmentId, RoleAssignmentStore, StoreError};
use sqlx::PgPool;

use super::map_sqlx_error;

pub struct PostgresRoleAssignmentStore {
    pool: PgPool,
}

impl PostgresRoleAssignmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RoleAssignmentStore for PostgresRoleAssignmentStore {
    #[tracing::instrument(name = "Saving role assignment to PostgreSQL", skip_all)]
    async fn save(&self, mut assignment: RoleAssignment) -> Result<RoleAssignment, StoreError> {
        match assignment.id {
            None => {
                let id: i64 = sqlx::query_scalar(
                    r#"
                        INSERT INTO role_assignments (account_id, role_id, created_by, created_at)
                        VALUES ($1, $2, $3, $4)
                        RETURNING id
                    "#,
                )
                .bind(assignment.account_id.value())
                .bind(assignment.role_id.value())
                .bind(assignment.created_by.map(AccountId::value))
                .bind(assignment.created_at)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

                assignment.id = Some(RoleAssignmentId::new(id));
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                        UPDATE role_assignments
                        SET account_id = $2, role_id = $3, created_by = $4, created_at = $5
                        WHERE id = $1
                    "#,
                )
                .bind(id.value())
                .bind(assignment.account_id.value())
                .bind(assignment.role_id.value())
                .bind(assignment.created_by.map(AccountId::value))
                .bind(assignment.created_at)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

                if result.rows_affected() == 0 {
                    return Err(StoreError::NotFound);
                }
            }
        }

        Ok(assignment)
    }

    #[tracing::instrument(name = "Deleting role assignment from PostgreSQL", skip(self))]
    async fn delete_by_id(&self, id: RoleAssignmentId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM role_assignments WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
