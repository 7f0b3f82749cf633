use chrono::{DateTime, Utc};
use colegio_core::{
    AccountId, ActivationToken, ActivationTokenId, ActivationTokenStore, StoreError, TokenValue,
};
use sqlx::{FromRow, PgPool};

use super::map_sqlx_error;

pub struct PostgresActivationTokenStore {
    pool: PgPool,
}

impl PostgresActivationTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ActivationTokenRow {
    id: i64,
    token: String,
    account_id: i64,
    issued_at: DateTime<Utc>,
}

impl From<ActivationTokenRow> for ActivationToken {
    fn from(row: ActivationTokenRow) -> Self {
        ActivationToken {
            id: Some(ActivationTokenId::new(row.id)),
            token: TokenValue::from(row.token),
            account_id: AccountId::new(row.account_id),
            issued_at: row.issued_at,
        }
    }
}

#[async_trait::async_trait]
impl ActivationTokenStore for PostgresActivationTokenStore {
    #[tracing::instrument(name = "Retrieving activation token from PostgreSQL", skip_all)]
    async fn find_by_token(
        &self,
        token: &TokenValue,
    ) -> Result<Option<ActivationToken>, StoreError> {
        let row = sqlx::query_as::<_, ActivationTokenRow>(
            r#"
                SELECT id, token, account_id, issued_at
                FROM activation_tokens
                WHERE token = $1
                LIMIT 1
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ActivationToken::from))
    }

    #[tracing::instrument(name = "Saving activation token to PostgreSQL", skip_all)]
    async fn save(&self, mut token: ActivationToken) -> Result<ActivationToken, StoreError> {
        match token.id {
            None => {
                let id: i64 = sqlx::query_scalar(
                    r#"
                        INSERT INTO activation_tokens (token, account_id, issued_at)
                        VALUES ($1, $2, $3)
                        RETURNING id
                    "#,
                )
                .bind(token.token.as_str())
                .bind(token.account_id.value())
                .bind(token.issued_at)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

                token.id = Some(ActivationTokenId::new(id));
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                        UPDATE activation_tokens
                        SET token = $2, account_id = $3, issued_at = $4
                        WHERE id = $1
                    "#,
                )
                .bind(id.value())
                .bind(token.token.as_str())
                .bind(token.account_id.value())
                .bind(token.issued_at)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

                if result.rows_affected() == 0 {
                    return Err(StoreError::NotFound);
                }
            }
        }

        Ok(token)
    }
}
